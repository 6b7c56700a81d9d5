// ReportConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::DatapointSelection;
use std::path::PathBuf;

/// Default allowlist location.
pub const DEFAULT_BUCKETS_FILE: &str = "buckets.txt";

/// Default report location.
pub const DEFAULT_OUTPUT: &str = "stats.csv";

/// Configuration of a single report run.
#[derive(Debug)]
pub struct ReportConfig {
    /// File holding the names of the buckets to report on, one per line.
    pub buckets_file: PathBuf,

    /// Where the CSV report is written. Any existing file is truncated.
    pub output: PathBuf,

    /// Which datapoint wins when CloudWatch returns more than one.
    pub datapoint_selection: DatapointSelection,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            buckets_file:        DEFAULT_BUCKETS_FILE.into(),
            output:              DEFAULT_OUTPUT.into(),
            datapoint_selection: DatapointSelection::default(),
        }
    }
}
