pub mod flyby_record;
pub mod sanitize;
pub mod source;
mod table_errors;

pub use flyby_record::{FlybyRecord, Sample};
pub use source::{DirectorySource, InMemorySource, TableSource};
pub use table_errors::TableErrors;
