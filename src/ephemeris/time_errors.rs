use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeErrors {
    #[error("unrecognized UTC string '{0}'")]
    Unrecognized(String),
    #[error("epoch out of range: {0}")]
    OutOfRange(hifitime::errors::Errors),
}
