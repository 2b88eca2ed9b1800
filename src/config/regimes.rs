use crate::constants::{AMU_TO_KG, KEV_TO_KELVIN};
use std::fmt;

/// One plasma sub-population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaComponent {
    pub density: f64,        // m^-3
    pub temperature: f64,    // K
    pub molecular_mass: f64, // kg
}

/// Plasma constants of one magnetospheric region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeParameters {
    pub beta: f64,
    pub density: f64,          // m^-3
    pub temperature: f64,      // K
    pub molecular_mass: f64,   // kg
    pub background_field: f64, // nT
    pub mach_number: f64,
}

impl RegimeParameters {
    pub fn plasma(&self) -> PlasmaComponent {
        PlasmaComponent {
            density: self.density,
            temperature: self.temperature,
            molecular_mass: self.molecular_mass,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CurrentSheet,
    InnerLobe,
    OuterLobe,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::CurrentSheet, Region::InnerLobe, Region::OuterLobe];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Region::CurrentSheet => write!(f, "current sheet"),
            Region::InnerLobe => write!(f, "inner lobe"),
            Region::OuterLobe => write!(f, "outer lobe"),
        }
    }
}

/// Ionosphere plus the three magnetospheric regions compared against it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeCatalog {
    pub ionosphere: Vec<PlasmaComponent>,
    pub current_sheet: RegimeParameters,
    pub inner_lobe: RegimeParameters,
    pub outer_lobe: RegimeParameters,
}

impl RegimeCatalog {
    pub fn region(&self, region: Region) -> &RegimeParameters {
        match region {
            Region::CurrentSheet => &self.current_sheet,
            Region::InnerLobe => &self.inner_lobe,
            Region::OuterLobe => &self.outer_lobe,
        }
    }
}

impl Default for RegimeCatalog {
    /// Ionosphere from Kliore et al.; magnetosphere regimes after Seufert (2012).
    /// The lobe entries bracket the quiet (inner) and disturbed (outer) lobe.
    fn default() -> Self {
        let electron_molar_mass = 5.49e-7; // kg/mol
        let magnetosphere_temperature = 0.635 * KEV_TO_KELVIN;

        Self {
            ionosphere: vec![
                PlasmaComponent {
                    density: 2e4,
                    temperature: 2.0 * KEV_TO_KELVIN,
                    molecular_mass: electron_molar_mass,
                },
                PlasmaComponent {
                    density: 5e5,
                    temperature: 0.1 * KEV_TO_KELVIN,
                    molecular_mass: electron_molar_mass,
                },
            ],
            current_sheet: RegimeParameters {
                beta: 64.0,
                density: 1e5,
                temperature: magnetosphere_temperature,
                molecular_mass: 16.0 * AMU_TO_KG,
                background_field: 30.0,
                mach_number: 0.4,
            },
            inner_lobe: RegimeParameters {
                beta: 0.6,
                density: 1e4,
                temperature: magnetosphere_temperature,
                molecular_mass: 2.0 * AMU_TO_KG,
                background_field: 30.0,
                mach_number: 0.03,
            },
            outer_lobe: RegimeParameters {
                beta: 0.6,
                density: 5e5,
                temperature: magnetosphere_temperature,
                molecular_mass: 2.0 * AMU_TO_KG,
                background_field: 30.0,
                mach_number: 1.2,
            },
        }
    }
}
