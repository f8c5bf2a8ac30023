//! # Summary Record Flows
//!
//! Merging the records of several input files into run totals, the way a
//! job reading many subruns of one run does.

use lc_02_summary_data::{GeometryConfigurationInfo, POTSummary, RunData, SummaryError};
use tracing::info;

/// Records read from one input file.
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub run: RunData,
    pub pot: POTSummary,
}

/// Totals of a sequence of files, or the first inconsistency found.
pub fn merge_files(files: &[FileSummary]) -> Result<(RunData, POTSummary), SummaryError> {
    let mut iter = files.iter();
    let Some(first) = iter.next() else {
        return Ok((RunData::default(), POTSummary::default()));
    };

    let mut run = first.run.clone();
    let mut pot = first.pot;
    for file in iter {
        run.aggregate(&file.run)?;
        pot.aggregate(&file.pot);
    }

    info!(detector = run.det_name(), files = files.len(), "Merged summaries");
    Ok((run, pot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_telemetry::{init_logging, TelemetryConfigBuilder};

    fn setup_logging() {
        let config = TelemetryConfigBuilder::new()
            .service_name("lc-tests")
            .log_level("trace")
            .console_output(false)
            .build()
            .unwrap();
        // Another test may have installed the subscriber already.
        let _ = init_logging(&config);
    }

    fn file(detector: &str, pot: f64, spills: i32) -> FileSummary {
        FileSummary {
            run: RunData::new(detector),
            pot: POTSummary::new(pot, pot * 0.9, spills, spills - 1),
        }
    }

    #[test]
    fn test_merge_consistent_files() {
        setup_logging();
        let files = vec![file("sbnd", 1.0e12, 10), file("sbnd", 2.0e12, 20), file("sbnd", 3.0e12, 30)];

        let (run, pot) = merge_files(&files).unwrap();
        assert_eq!(run.det_name(), "sbnd");
        assert!((pot.totpot - 6.0e12).abs() < 1.0);
        assert!((pot.totgoodpot - 5.4e12).abs() < 1.0);
        assert_eq!(pot.totspills, 60);
        assert_eq!(pot.goodspills, 57);
    }

    #[test]
    fn test_merge_stops_at_foreign_detector() {
        setup_logging();
        let files = vec![file("sbnd", 1.0, 1), file("icarus", 1.0, 1)];

        let err = merge_files(&files).unwrap_err();
        assert_eq!(
            err,
            SummaryError::InconsistentRunData {
                ours: "sbnd".to_string(),
                theirs: "icarus".to_string(),
            }
        );
        assert_eq!(files[0].run.det_name(), "sbnd");
        assert_eq!(files[1].run.det_name(), "icarus");
    }

    #[test]
    fn test_merge_nothing() {
        let (run, pot) = merge_files(&[]).unwrap();
        assert_eq!(run.det_name(), "nodetectorname");
        assert_eq!(pot, POTSummary::default());
    }

    #[test]
    fn test_geometry_info_through_json() {
        setup_logging();
        let info = GeometryConfigurationInfo {
            data_version: 3,
            geometry_service_configuration: "Name: \"sbnd_v02_00\"".to_string(),
            detector_name: "sbnd".to_string(),
        };

        let json = serde_json::to_string(&info).unwrap();
        let back: GeometryConfigurationInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);

        let text = back.to_string();
        assert!(text.contains("Detector name:               'sbnd'"));
        assert!(text.contains("Name: \"sbnd_v02_00\""));
        assert!(text.ends_with("can't fully decode further information]"));
    }
}
