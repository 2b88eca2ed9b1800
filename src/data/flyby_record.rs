use super::sanitize::{sanitize_field, sanitize_position};
use super::table_errors::TableErrors;
use crate::ephemeris::TimeOracle;
use hifitime::Epoch;
use nalgebra as na;

/// timestamp, B (3), |B|, position (3)
const TABLE_COLUMNS: usize = 8;

/// One magnetometer record
#[derive(Debug, Clone)]
pub struct Sample {
    pub epoch: Epoch,
    pub position: na::Vector3<f64>, // Body frame (m)
    pub field: na::Vector3<f64>,    // nT
    pub magnitude: f64,             // nT
}

/// All samples of one flyby, aligned to its closest approach.
#[derive(Debug, Clone)]
pub struct FlybyRecord {
    label: String,
    closest_approach: Epoch,
    samples: Vec<Sample>,
    relative_time: Vec<f64>, // seconds from closest approach
}

impl FlybyRecord {
    /// Build a record from already sanitized samples.
    pub fn new<O: TimeOracle>(
        label: &str,
        closest_approach: Epoch,
        samples: Vec<Sample>,
        oracle: &O,
    ) -> Self {
        let relative_time = samples
            .iter()
            .map(|s| oracle.seconds_between(closest_approach, s.epoch))
            .collect();

        Self {
            label: label.to_string(),
            closest_approach,
            samples,
            relative_time,
        }
    }

    /// Parse and sanitize a whitespace-delimited magnetometer table.
    /// Positions are given in body radii and scaled by `body_radius` (m).
    pub fn from_table<O: TimeOracle>(
        label: &str,
        table: &str,
        closest_approach: Epoch,
        body_radius: f64,
        oracle: &O,
    ) -> Result<Self, TableErrors> {
        let mut samples: Vec<Sample> = Vec::new();

        for (index, row) in table.lines().enumerate() {
            let line = index + 1;
            let columns: Vec<&str> = row.split_whitespace().collect();
            if columns.is_empty() {
                continue;
            }
            if columns.len() < TABLE_COLUMNS {
                return Err(TableErrors::ColumnCount {
                    line,
                    expected: TABLE_COLUMNS,
                    found: columns.len(),
                });
            }

            let epoch = oracle
                .utc_to_epoch(columns[0])
                .map_err(|source| TableErrors::Timestamp { line, source })?;
            if let Some(previous) = samples.last() {
                if epoch < previous.epoch {
                    return Err(TableErrors::NonMonotonic { line });
                }
            }

            let mut values = [0.0; TABLE_COLUMNS - 1];
            for (offset, value) in values.iter_mut().enumerate() {
                let column = offset + 1;
                *value = columns[column]
                    .parse::<f64>()
                    .map_err(|source| TableErrors::ParseFloat {
                        line,
                        column,
                        source,
                    })?;
                // Only the sentinels mark missing data
                if !value.is_finite() {
                    return Err(TableErrors::NonFinite { line, column });
                }
            }

            samples.push(Sample {
                epoch,
                field: na::Vector3::new(
                    sanitize_field(values[0]),
                    sanitize_field(values[1]),
                    sanitize_field(values[2]),
                ),
                magnitude: sanitize_field(values[3]),
                position: na::Vector3::new(
                    sanitize_position(values[4]),
                    sanitize_position(values[5]),
                    sanitize_position(values[6]),
                ) * body_radius,
            });
        }

        if samples.is_empty() {
            return Err(TableErrors::Empty);
        }

        Ok(Self::new(label, closest_approach, samples, oracle))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn closest_approach(&self) -> Epoch {
        self.closest_approach
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Seconds relative to closest approach, non-decreasing.
    pub fn relative_time(&self) -> &[f64] {
        &self.relative_time
    }

    pub fn positions(&self) -> Vec<na::Vector3<f64>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Observed |B|, NaN where the instrument reported no data.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.magnitude).collect()
    }
}
