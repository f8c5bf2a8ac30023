//! Cross-crate integration tests.

pub mod plane_geometry;
pub mod summary_flows;
