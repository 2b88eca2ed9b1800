// Target body
pub const CALLISTO_RADIUS: f64 = 2_410_300.0; // Mean radius of Callisto (m)

// Thermodynamics
pub const GAMMA: f64 = 5.0 / 3.0; // Adiabatic index of a monatomic plasma
pub const R_GAS: f64 = 8.314; // Ideal gas constant (J/mol/K)
pub const KEV_TO_KELVIN: f64 = 1000.0 * 1.2e4; // keV -> K
pub const AMU_TO_KG: f64 = 1.66e-27; // amu -> kg

// Missing-data markers used by the magnetometer tables
pub const FIELD_SENTINEL: f64 = 999999.99; // nT columns
pub const POSITION_SENTINEL: f64 = 999.99999; // body-radius columns

// Model falloff
pub const ANGULAR_FALLOFF: i32 = 1; // cos^x(theta)
pub const RADIAL_FALLOFF: i32 = 3; // r^-x

// Math
pub const PI: f64 = std::f64::consts::PI;
