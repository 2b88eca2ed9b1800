use crate::analysis::AnalysisErrors;
use crate::config::regimes::{PlasmaComponent, RegimeParameters};
use crate::constants::{GAMMA, R_GAS};

/// Pile-up amplitude of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeResult {
    pub factor: f64,             // A, dimensionless
    pub field_amplitude: f64,    // A * background field (nT)
    pub reference_pressure: f64, // P0 of the region
}

/// Ideal gas pressure P = (rho / m) * R * T
pub fn ideal_gas_pressure(plasma: &PlasmaComponent) -> Result<f64, AnalysisErrors> {
    if !(plasma.molecular_mass > 0.0) {
        return Err(AnalysisErrors::InvalidRegime(format!(
            "molecular mass must be positive, got {}",
            plasma.molecular_mass
        )));
    }
    if !(plasma.density >= 0.0) || !(plasma.temperature >= 0.0) {
        return Err(AnalysisErrors::InvalidRegime(format!(
            "density and temperature must be non-negative, got {} and {}",
            plasma.density, plasma.temperature
        )));
    }
    Ok((plasma.density / plasma.molecular_mass) * R_GAS * plasma.temperature)
}

/// Arithmetic mean pressure of several sub-populations.
pub fn mean_pressure(components: &[PlasmaComponent]) -> Result<f64, AnalysisErrors> {
    if components.is_empty() {
        return Err(AnalysisErrors::InvalidRegime(
            "no plasma components given".to_string(),
        ));
    }
    let total = components
        .iter()
        .map(ideal_gas_pressure)
        .sum::<Result<f64, AnalysisErrors>>()?;
    Ok(total / components.len() as f64)
}

/// Tangential-discontinuity pressure balance between the ionosphere and a
/// magnetospheric region.
pub struct PressureBalanceSolver;

impl PressureBalanceSolver {
    /// A = sqrt(beta (1 - P1/P0) + beta gamma M0^2 + 1)
    ///
    /// * `beta` - magnetospheric plasma beta
    /// * `p1` - ionospheric pressure
    /// * `p0` - magnetospheric pressure
    /// * `m0` - regime Mach number
    pub fn amplitude(beta: f64, p1: f64, p0: f64, m0: f64) -> Result<f64, AnalysisErrors> {
        if !(p0 > 0.0) || !p0.is_finite() {
            return Err(AnalysisErrors::InvalidRegime(format!(
                "reference pressure must be positive, got {}",
                p0
            )));
        }

        let radicand = beta * (1.0 - p1 / p0) + beta * GAMMA * m0.powi(2) + 1.0;
        if !(radicand >= 0.0) {
            return Err(AnalysisErrors::InvalidRegime(format!(
                "pressure balance has no real solution (radicand {})",
                radicand
            )));
        }

        Ok(radicand.sqrt())
    }

    /// Solve one region against the given ionospheric pressure.
    pub fn solve(
        regime: &RegimeParameters,
        ionosphere_pressure: f64,
    ) -> Result<AmplitudeResult, AnalysisErrors> {
        let p0 = ideal_gas_pressure(&regime.plasma())?;
        let factor = Self::amplitude(regime.beta, ionosphere_pressure, p0, regime.mach_number)?;

        Ok(AmplitudeResult {
            factor,
            field_amplitude: factor * regime.background_field,
            reference_pressure: p0,
        })
    }
}
