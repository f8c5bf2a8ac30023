//! # LAr-Core Test Suite
//!
//! Unified test crate for behavior that spans several workspace crates.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/  # Cross-crate flows
//! │   ├── id_hierarchies.rs
//! │   ├── plane_geometry.rs
//! │   └── summary_flows.rs
//! └── benches/          # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lc-tests
//!
//! # By flow
//! cargo test -p lc-tests integration::summary_flows::
//!
//! # Benchmarks
//! cargo bench -p lc-tests
//! ```

pub mod integration;
