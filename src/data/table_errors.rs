use crate::ephemeris::TimeErrors;
use std::num::ParseFloatError;
use thiserror::Error;

/// Problems found while reading a magnetometer table. Any of these makes the
/// whole table unusable for its flyby.
#[derive(Debug, Error)]
pub enum TableErrors {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {source}")]
    ParseFloat {
        line: usize,
        column: usize,
        source: ParseFloatError,
    },
    #[error("line {line}, column {column}: value is not finite")]
    NonFinite { line: usize, column: usize },
    #[error("line {line}: {source}")]
    Timestamp { line: usize, source: TimeErrors },
    #[error("line {line}: timestamp precedes the previous sample")]
    NonMonotonic { line: usize },
    #[error("table contains no samples")]
    Empty,
}
