//! # LC Telemetry
//!
//! Structured logging for LAr-Core binaries and test suites.
//!
//! Library crates of the workspace only emit `tracing` events. Nothing is
//! printed until a subscriber is installed with [`init_logging`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lc_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> Result<(), lc_telemetry::TelemetryError> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Events from every crate are now printed
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LC_SERVICE_NAME` | `lar-core` | Service name in the startup event |
//! | `LC_LOG_LEVEL` | `info` | Filter directives, falls back to `RUST_LOG` |
//! | `LC_JSON_LOGS` | `false` | JSON formatted output |
//! | `LC_CONSOLE_OUTPUT` | `true` | Print events at all |

mod config;
mod logging;

pub use config::{TelemetryConfig, TelemetryConfigBuilder};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to install logging subscriber: {0}")]
    SubscriberInit(String),
}

/// Convenience macro for creating a span scoped to one detector element.
///
/// # Example
///
/// ```rust,ignore
/// use lc_telemetry::element_span;
///
/// let _span = element_span!("dump_plane", plane_id).entered();
/// ```
#[macro_export]
macro_rules! element_span {
    ($name:expr, $id:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name, element = %$id $(, $($field)*)?)
    };
}
