//! # Physical Constants
//!
//! Fixed numeric constants and angle conversion helpers.
//!
//! Recombination coefficients follow the Birks-like model of
//! Nucl. Instrum. Meth. A523:275-286 (2004):
//!
//! ```text
//! R = A / (1 + (dE/dx) * k / E)
//! ```
//!
//! with `dE/dx` in MeV/cm and the electric field `E` in kV/cm. The modified
//! box model (ArgoNeuT, JINST) uses `MOD_BOX_A` and `MOD_BOX_B`; the latter
//! has to be scaled with the electric field.

use num_traits::{Float, FloatConst};

// =============================================================================
// RECOMBINATION
// =============================================================================

/// Birks model `A` constant.
pub const RECOMB_A: f64 = 0.800;

/// Birks model `k` constant, in g/(MeV cm²)·kV/cm.
pub const RECOMB_K: f64 = 0.0486;

/// Modified box model alpha.
pub const MOD_BOX_A: f64 = 0.930;

/// Modified box model beta, in g/(MeV cm²)·kV/cm.
pub const MOD_BOX_B: f64 = 0.212;

/// Ionization electrons per GeV (23.6 eV per ion pair).
pub const GEV_TO_ELECTRONS: f64 = 4.237e7;

// =============================================================================
// KINEMATICS AND UNITS
// =============================================================================

/// Speed of light in vacuum, in cm/ns.
pub const SPEED_OF_LIGHT: f64 = 29.9792458;

/// 1 m = 100 cm
pub const METER_TO_CENTIMETER: f64 = 1.0e2;
pub const CENTIMETER_TO_METER: f64 = 1.0 / METER_TO_CENTIMETER;

/// 1000 m = 1 km
pub const METER_TO_KILOMETER: f64 = 1.0e-3;
pub const KILOMETER_TO_METER: f64 = 1.0 / METER_TO_KILOMETER;

/// 1e6 eV = 1 MeV
pub const EV_TO_MEV: f64 = 1.0e-6;
pub const MEV_TO_EV: f64 = 1.0 / EV_TO_MEV;

// =============================================================================
// SENTINELS
// =============================================================================

/// Obviously bogus double value.
pub const BOGUS_D: f64 = -999.0;

/// Obviously bogus integer value.
pub const BOGUS_I: i32 = -999;

/// Obviously bogus float value.
pub const BOGUS_F: f32 = -999.0;

// =============================================================================
// ANGLES
// =============================================================================

/// Pi in the requested floating point precision.
pub fn pi<T: FloatConst>() -> T {
    T::PI()
}

/// Converts an angle from degrees to radians.
pub fn degrees_to_radians<T: Float>(angle: T) -> T {
    angle.to_radians()
}

/// Converts an angle from radians to degrees.
pub fn radians_to_degrees<T: Float>(angle: T) -> T {
    angle.to_degrees()
}
