use super::pressure_balance::AmplitudeResult;
use crate::analysis::AnalysisErrors;
use crate::constants::{ANGULAR_FALLOFF, RADIAL_FALLOFF};

/// Field magnitude of the pile-up toy model along a trajectory.
///
/// `B = Bms + A * (r / L)^-n * cos(theta)^m` where `r` is the distance from the
/// body center and `L` the body radius, so the plasma contribution is exactly
/// `A` on the surface at the equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PileupFieldModel {
    amplitude: f64,        // nT
    background_field: f64, // nT
    angular_falloff: i32,
    radial_falloff: i32,
    characteristic_length: f64, // m
}

/// Model magnitudes aligned with a flyby's time axis
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCurve {
    pub amplitude: AmplitudeResult,
    pub field: Vec<f64>, // nT
}

impl PileupFieldModel {
    pub fn new(amplitude: f64, background_field: f64, body_radius: f64) -> Self {
        Self {
            amplitude,
            background_field,
            angular_falloff: ANGULAR_FALLOFF,
            radial_falloff: RADIAL_FALLOFF,
            characteristic_length: body_radius,
        }
    }

    pub fn from_amplitude(
        amplitude: &AmplitudeResult,
        background_field: f64,
        body_radius: f64,
    ) -> Self {
        Self::new(amplitude.field_amplitude, background_field, body_radius)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn background_field(&self) -> f64 {
        self.background_field
    }

    /// Model magnitude at one point; `distance` is above the surface (m).
    pub fn field_at(&self, distance: f64, angle: f64) -> f64 {
        let r = (distance + self.characteristic_length) / self.characteristic_length;
        self.background_field
            + self.amplitude * r.powi(-self.radial_falloff) * angle.cos().powi(self.angular_falloff)
    }

    /// Evaluate over a whole trajectory. Missing geometry yields NaN at that index.
    pub fn evaluate(&self, distances: &[f64], angles: &[f64]) -> Result<Vec<f64>, AnalysisErrors> {
        if distances.len() != angles.len() {
            return Err(AnalysisErrors::InvalidGeometry(format!(
                "{} distances but {} angles",
                distances.len(),
                angles.len()
            )));
        }

        Ok(distances
            .iter()
            .zip(angles)
            .map(|(&d, &theta)| self.field_at(d, theta))
            .collect())
    }
}
