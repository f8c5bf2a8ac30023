//! # LC-01 Element IDs
//!
//! Identifiers of detector elements, in two hierarchies sharing one root.
//!
//! ## Hierarchies
//!
//! ```text
//! geometry:  Cryostat (C) ─┬─ OpDet (O)
//!                          └─ TPC (T) ── Plane (P) ── Wire (W)
//!
//! readout:   Cryostat (C) ── TPC set (S) ── Readout plane (R)
//! ```
//!
//! Both are instantiations of the generic chain in [`chain`]: a `CryostatID`
//! root and `ChildId<K>` values that add one index per level.
//!
//! ## Invariants
//!
//! - Default-constructed identifiers are invalid and every index holds the
//!   maximum value of its type.
//! - Only the cryostat carries a validity flag; deeper levels report the
//!   root's flag.
//! - Equality, hashing and ordering ignore validity. Ordering is
//!   lexicographic from the cryostat down.
//! - The rendered form (`"C:1 T:5 P:2 W:9"`) parses back with `FromStr`.
//!
//! ## Usage Example
//!
//! ```
//! use lc_01_element_ids::{ElementId, PlaneID, WireID};
//!
//! let wire = WireID::new(1, 5, 2, 9);
//! assert_eq!(wire.to_string(), "C:1 T:5 P:2 W:9");
//! assert_eq!(*wire.deepest_index(), 9);
//! assert_eq!(wire.index_at::<1>(), 5);
//! assert_eq!(wire.plane_id(), &PlaneID::new(1, 5, 2));
//!
//! let parsed: WireID = "C:1 T:5 P:2 W:9".parse().unwrap();
//! assert_eq!(parsed, wire);
//! ```

pub mod chain;
pub mod error;
pub mod geo;
pub mod plane_types;
pub mod readout;

// Re-exports for convenience
pub use chain::{
    parse_id, three_way_comparison, AboveLevel, AtLevel, ChildId, ChildLevel, CryostatID,
    CryostatIndex, ElementId, IndexAt, IndexValue, Level, RelIndexAt,
};
pub use error::IdError;
pub use geo::{
    OpDetID, OpDetIndex, OpDetLevel, PlaneID, PlaneIndex, PlaneLevel, TPCID, TpcIndex, TpcLevel,
    WireID, WireIndex, WireLevel,
};
pub use plane_types::{signal_type_name, Coord, DriftDirection, Orient, SigType, View};
pub use readout::{ROPID, ROPIndex, RopLevel, TPCsetID, TPCsetIndex, TPCsetLevel};
