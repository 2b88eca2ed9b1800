use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Where raw magnetometer tables come from.
pub trait TableSource {
    fn load(&self, table_id: &str) -> io::Result<String>;
}

/// Tables stored as files in one directory, named by table id.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TableSource for DirectorySource {
    fn load(&self, table_id: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(table_id))
    }
}

/// Tables held in memory, keyed by table id.
#[derive(Default)]
pub struct InMemorySource {
    tables: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table_id: &str, contents: &str) -> Self {
        self.tables.insert(table_id.to_string(), contents.to_string());
        self
    }
}

impl TableSource for InMemorySource {
    fn load(&self, table_id: &str) -> io::Result<String> {
        self.tables.get(table_id).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no table {}", table_id))
        })
    }
}
