//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where report files are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Root directory for report files.
    pub report_dir: PathBuf,
    /// Write each run into its own `<report_dir>/<start_time_ms>` directory.
    #[serde(default)]
    pub timestamped_reports: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            report_dir: cwd.join("target").join("mutation-reports"),
            timestamped_reports: false,
        }
    }
}

impl ReportConfig {
    /// Set report directory.
    pub fn with_report_dir(mut self, report_dir: impl Into<PathBuf>) -> Self {
        self.report_dir = report_dir.into();
        self
    }

    /// Toggle per-run timestamped directories.
    pub fn with_timestamped_reports(mut self, timestamped: bool) -> Self {
        self.timestamped_reports = timestamped;
        self
    }

    /// Directory reports for a run started at `start_time_ms` land in.
    pub fn output_dir(&self, start_time_ms: i64) -> PathBuf {
        if self.timestamped_reports {
            self.report_dir.join(start_time_ms.to_string())
        } else {
            self.report_dir.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_and_builder_overrides_work() {
        let default = ReportConfig::default();
        assert!(default.report_dir.ends_with("target/mutation-reports"));
        assert!(!default.timestamped_reports);

        let cfg = ReportConfig::default()
            .with_report_dir("/tmp/reports-a")
            .with_timestamped_reports(true);
        assert_eq!(cfg.report_dir, PathBuf::from("/tmp/reports-a"));
        assert_eq!(
            cfg.output_dir(1_700_000_000_000),
            PathBuf::from("/tmp/reports-a/1700000000000")
        );
    }

    #[test]
    fn undated_output_dir_is_report_dir() {
        let cfg = ReportConfig::default().with_report_dir("/tmp/reports-b");
        assert_eq!(cfg.output_dir(42), PathBuf::from("/tmp/reports-b"));
    }

    #[test]
    fn timestamped_flag_defaults_when_absent_from_json() {
        let cfg: ReportConfig = serde_json::from_str(r#"{"report_dir":"/tmp/r"}"#)
            .expect("config should decode");
        assert!(!cfg.timestamped_reports);
    }
}
