//! Run-level metadata.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::SummaryError;

/// Detector name of a record built without one.
pub const DEFAULT_DETECTOR_NAME: &str = "nodetectorname";

/// Information attached to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunData {
    det_name: String,
}

impl RunData {
    pub fn new(detector_name: impl Into<String>) -> Self {
        Self {
            det_name: detector_name.into(),
        }
    }

    pub fn det_name(&self) -> &str {
        &self.det_name
    }

    /// Merges another record found for the same run.
    ///
    /// Both records must describe the same detector. On mismatch neither
    /// record changes.
    pub fn aggregate(&mut self, other: &RunData) -> Result<(), SummaryError> {
        if self.det_name != other.det_name {
            warn!(
                ours = %self.det_name,
                theirs = %other.det_name,
                "Refusing to merge run data of different detectors"
            );
            return Err(SummaryError::InconsistentRunData {
                ours: self.det_name.clone(),
                theirs: other.det_name.clone(),
            });
        }

        trace!(detector = %self.det_name, "Merged run data");
        Ok(())
    }
}

impl Default for RunData {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTOR_NAME)
    }
}
