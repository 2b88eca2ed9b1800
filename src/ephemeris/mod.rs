mod time_errors;
mod time_oracle;

pub use time_errors::TimeErrors;
pub use time_oracle::{TimeOracle, UtcTimeOracle};
