use super::time_errors::TimeErrors;
use chrono::{Datelike, NaiveDateTime, Timelike};
use hifitime::Epoch;

/// Calendar layouts accepted for UTC strings, tried in order.
/// Covers the magnetometer table timestamps and the mission-timeline style
/// (`04 November 1996, 13:34 UTC`) used for closest approach times.
const UTC_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d %B %Y, %H:%M:%S%.f",
    "%d %B %Y, %H:%M",
];

/// Converts UTC strings to absolute time.
pub trait TimeOracle {
    fn utc_to_epoch(&self, utc: &str) -> Result<Epoch, TimeErrors>;

    /// Signed seconds from `reference` to `epoch`
    fn seconds_between(&self, reference: Epoch, epoch: Epoch) -> f64 {
        (epoch - reference).to_seconds()
    }
}

/// Calendar-only oracle: no kernels, just UTC parsing with leap seconds
/// handled by hifitime.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcTimeOracle;

impl TimeOracle for UtcTimeOracle {
    fn utc_to_epoch(&self, utc: &str) -> Result<Epoch, TimeErrors> {
        let trimmed = utc.trim();
        let trimmed = trimmed.strip_suffix("UTC").unwrap_or(trimmed).trim_end();

        let parsed = UTC_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| TimeErrors::Unrecognized(utc.to_string()))?;

        Epoch::maybe_from_gregorian_utc(
            parsed.year(),
            parsed.month() as u8,
            parsed.day() as u8,
            parsed.hour() as u8,
            parsed.minute() as u8,
            parsed.second() as u8,
            parsed.nanosecond(),
        )
        .map_err(TimeErrors::OutOfRange)
    }
}
