//! # Shared Types Crate
//!
//! Value types every other crate of the workspace builds on.
//!
//! ## Contents
//!
//! - **Constants** (`constants`): recombination model coefficients, unit
//!   conversion factors, the speed of light and the "bogus" sentinels used for
//!   values that were never filled.
//! - **Vectors** (`vectors`): 3D points and displacement vectors bound to a
//!   coordinate system tag, rotations, and the middle point accumulator.
//!
//! ## Units
//!
//! The standard units are GeV for energy, ns for time and cm for space.
//! Every `Length` is in centimeters.

pub mod constants;
pub mod vectors;

pub use constants::{degrees_to_radians, pi, radians_to_degrees};
pub use vectors::{
    middle_point, CoordinateSystem, GlobalCoords, Length, MiddlePointAccumulator,
    MiddlePointAccumulatorOf, OpticalLocalCoords, OpticalPoint, OpticalVector, Point, Point3D,
    Rotation, Vector, Vector3D,
};
