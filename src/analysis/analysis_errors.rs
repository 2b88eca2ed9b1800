use crate::ephemeris::TimeErrors;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisErrors {
    #[error("unknown flyby '{0}'")]
    UnknownFlyby(String),
    #[error("data unavailable for {table}: {reason}")]
    DataUnavailable { table: String, reason: String },
    #[error("invalid regime: {0}")]
    InvalidRegime(String),
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimeErrors),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisErrors {
    pub fn data_unavailable(table: &str, reason: impl Display) -> Self {
        AnalysisErrors::DataUnavailable {
            table: table.to_string(),
            reason: reason.to_string(),
        }
    }
}
