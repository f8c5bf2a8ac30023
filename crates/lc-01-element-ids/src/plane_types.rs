//! Plane classification: projection view, orientation, signal type and
//! drift direction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdError;

/// Cartesian coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coord {
    X,
    Y,
    Z,
}

/// Projection measured by a wire plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum View {
    U,
    V,
    /// Third view. Vertical wires measure Z, see [`View::Z`].
    W,
    /// 3D objects: hits, clusters, prongs.
    ThreeD,
    Unknown,
}

impl View {
    /// Planes measuring the Z direction share the `W` view.
    pub const Z: View = View::W;
}

/// Plane orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orient {
    Horizontal,
    Vertical,
}

/// Kind of signal a plane collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigType {
    Induction,
    Collection,
    MysteryType,
}

impl TryFrom<i32> for SigType {
    type Error = IdError;

    fn try_from(value: i32) -> Result<Self, IdError> {
        match value {
            0 => Ok(SigType::Induction),
            1 => Ok(SigType::Collection),
            2 => Ok(SigType::MysteryType),
            other => Err(IdError::UnknownSignalType(other)),
        }
    }
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(signal_type_name(*self))
    }
}

/// Human-readable name of a signal type.
pub fn signal_type_name(sig_type: SigType) -> &'static str {
    match sig_type {
        SigType::Induction => "induction",
        SigType::Collection => "collection",
        SigType::MysteryType => "unknown",
    }
}

/// Sign of the drift along its axis.
///
/// The axis itself is not encoded: negative x drift and negative z drift are
/// both `Negative`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriftDirection {
    #[default]
    Unknown,
    Positive,
    Negative,
}

impl DriftDirection {
    pub const POSITIVE_X: DriftDirection = DriftDirection::Positive;
    pub const NEGATIVE_X: DriftDirection = DriftDirection::Negative;
}
