//! Description of the geometry configuration a run was processed with.
//!
//! ## Versions
//!
//! | Version | Content |
//! |---|---|
//! | 0 | invalid record |
//! | 1 | detector name |
//! | 2 | full geometry service configuration |

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Type of the record version.
pub type DataVersion = u32;

/// Highest version this code fully decodes.
pub const LATEST_DATA_VERSION: DataVersion = 2;

/// Geometry configuration record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryConfigurationInfo {
    /// Version of the data in this record (0 is invalid).
    pub data_version: DataVersion,
    /// Configuration of the geometry service, as text.
    pub geometry_service_configuration: String,
    pub detector_name: String,
}

impl GeometryConfigurationInfo {
    pub const INVALID_DATA_VERSION: DataVersion = 0;

    /// A record of the latest version.
    pub fn new(
        detector_name: impl Into<String>,
        geometry_service_configuration: impl Into<String>,
    ) -> Self {
        Self {
            data_version: LATEST_DATA_VERSION,
            geometry_service_configuration: geometry_service_configuration.into(),
            detector_name: detector_name.into(),
        }
    }

    pub fn is_data_valid(&self) -> bool {
        self.data_version != Self::INVALID_DATA_VERSION
    }
}

impl fmt::Display for GeometryConfigurationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_data_valid() {
            return writeln!(f, "Invalid geometry configuration information");
        }

        write!(f, "Geometry information version: {}", self.data_version)?;

        if self.data_version >= 1 {
            write!(f, "\nDetector name:               '{}'", self.detector_name)?;
        }

        if self.data_version >= 2 {
            let ruler = "-".repeat(80);
            write!(
                f,
                "\nFull configuration:\n{}\n{}\n{}",
                ruler, self.geometry_service_configuration, ruler
            )?;
        }

        if self.data_version > LATEST_DATA_VERSION {
            debug!(
                version = self.data_version,
                latest = LATEST_DATA_VERSION,
                "Geometry configuration newer than supported"
            );
            write!(
                f,
                "\n[this version of code can't fully decode further information]"
            )?;
        }

        Ok(())
    }
}
