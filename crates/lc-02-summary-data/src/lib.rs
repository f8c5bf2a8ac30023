//! # LC-02 Summary Data
//!
//! Records summarizing a run or subrun.
//!
//! - [`RunData`]: detector the run was taken with. Merging records of
//!   different detectors fails.
//! - [`POTSummary`]: protons-on-target and spill counters, merged by
//!   field-wise addition.
//! - [`GeometryConfigurationInfo`]: versioned description of the geometry
//!   configuration used for processing.
//!
//! ## Usage Example
//!
//! ```
//! use lc_02_summary_data::{POTSummary, RunData};
//!
//! let mut run = RunData::new("icarus");
//! assert!(run.aggregate(&RunData::new("sbnd")).is_err());
//!
//! let mut pot = POTSummary::new(10.0, 5.0, 2, 1);
//! pot.aggregate(&POTSummary::new(3.0, 1.0, 1, 1));
//! assert_eq!(pot.totspills, 3);
//! ```

pub mod error;
pub mod geometry_config;
pub mod pot_summary;
pub mod run_data;

// Re-exports for convenience
pub use error::SummaryError;
pub use geometry_config::{DataVersion, GeometryConfigurationInfo, LATEST_DATA_VERSION};
pub use pot_summary::POTSummary;
pub use run_data::{RunData, DEFAULT_DETECTOR_NAME};
