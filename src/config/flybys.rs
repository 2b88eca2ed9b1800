use crate::analysis::AnalysisErrors;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;

/// Highest Galileo orbit number that carries a Callisto designation
const LAST_ORBIT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlybyEntry {
    pub label: String,
    pub closest_approach_utc: String,
}

impl FlybyEntry {
    pub fn new(label: &str, closest_approach_utc: &str) -> Self {
        Self {
            label: label.to_string(),
            closest_approach_utc: closest_approach_utc.to_string(),
        }
    }
}

/// Orbit number of a flyby designation such as `C3` or `C30`.
pub fn orbit_number(label: &str) -> Result<u32, AnalysisErrors> {
    let unknown = || AnalysisErrors::UnknownFlyby(label.to_string());

    let digits = label.strip_prefix('C').ok_or_else(unknown)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(unknown());
    }
    let orbit: u32 = digits.parse().map_err(|_| unknown())?;
    if !(1..=LAST_ORBIT).contains(&orbit) {
        return Err(unknown());
    }
    Ok(orbit)
}

/// Flybys with known closest approach times
#[derive(Debug, Clone, PartialEq)]
pub struct FlybyCatalog {
    entries: Vec<FlybyEntry>,
}

impl FlybyCatalog {
    /// Entries with invalid designations are rejected up front.
    pub fn new(entries: Vec<FlybyEntry>) -> Result<Self, AnalysisErrors> {
        for entry in &entries {
            orbit_number(&entry.label)?;
        }
        Ok(Self { entries })
    }

    /// Read a catalog with the header `label,closest_approach_utc`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnalysisErrors> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = rdr
            .deserialize()
            .collect::<Result<Vec<FlybyEntry>, csv::Error>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[FlybyEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Look up a flyby and its orbit number; unknown designations and
    /// uncatalogued flybys both fail.
    pub fn lookup(&self, label: &str) -> Result<(u32, &FlybyEntry), AnalysisErrors> {
        let orbit = orbit_number(label)?;
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|entry| (orbit, entry))
            .ok_or_else(|| AnalysisErrors::UnknownFlyby(label.to_string()))
    }
}

impl Default for FlybyCatalog {
    /// Galileo Callisto encounters. C20 is left out, its closest approach
    /// time is not pinned down to the minute.
    fn default() -> Self {
        Self {
            entries: vec![
                FlybyEntry::new("C3", "1996-11-04T13:34"),
                FlybyEntry::new("C9", "1997-06-25T13:47"),
                FlybyEntry::new("C10", "1997-09-17T00:18"),
                FlybyEntry::new("C21", "1999-06-30T07:46"),
                FlybyEntry::new("C22", "1999-08-14T08:30"),
                FlybyEntry::new("C23", "1999-09-16T17:27"),
                FlybyEntry::new("C30", "2001-05-25T11:23"),
            ],
        }
    }
}
