// Runs a complete report
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::aggregator::SizeAggregator;
use crate::common::{
    BucketProvider,
    Error,
    MetricsProvider,
    ReportConfig,
    Result,
};
use crate::fetcher::MetricFetcher;
use crate::report::ReportWriter;
use crate::selector;
use tracing::info;

/// Write the report described by `config`, returning the number of buckets
/// reported on.
///
/// Buckets are processed one at a time in listing order. The first failure
/// ends the run, rows already written stay in the report.
pub async fn run<B, M>(
    bucket_provider:  &B,
    metrics_provider: &M,
    config:           &ReportConfig,
) -> Result<usize>
where
    B: BucketProvider,
    M: MetricsProvider,
{
    let buckets = selector::select(
        bucket_provider,
        &config.buckets_file,
    ).await?;

    info!("run: Reporting on {} buckets", buckets.len());

    let output = &config.output;

    let mut writer = ReportWriter::create(output)
        .map_err(|e| Error::io(output, e))?;

    writer.write_header()
        .map_err(|e| Error::io(output, e))?;

    let fetcher    = MetricFetcher::new(metrics_provider, config.datapoint_selection);
    let aggregator = SizeAggregator::new(fetcher);

    for bucket in &buckets {
        println!("{}", bucket.name);

        let report = aggregator.aggregate(bucket).await?;

        writer.write_row(&report)
            .map_err(|e| Error::io(output, e))?;
    }

    let rows = writer.rows();

    writer.finish()
        .map_err(|e| Error::io(output, e))?;

    info!("run: Wrote {} rows to '{}'", rows, output.display());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        DatapointSelection,
        StorageType,
    };
    use crate::common::mock::{
        MockBucketProvider,
        MockMetricsProvider,
    };
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = concat!(
        "Bucket Name,Number of Objects,Glacier Overhead (Gb),",
        "Total Size (Gb),Standard Size (Gb),Infrequent Access Size (Gb),",
        "Intelligent Tiering Size (Gb),Glacier Size (Gb)",
    );

    // Write `allowlist` into a fresh directory and return a config pointing
    // at it.
    fn setup(allowlist: &str) -> (TempDir, ReportConfig) {
        let dir = tempfile::tempdir().unwrap();

        let buckets_file = dir.path().join("buckets.txt");
        fs::write(&buckets_file, allowlist).unwrap();

        let config = ReportConfig {
            buckets_file,
            output:              dir.path().join("stats.csv"),
            datapoint_selection: DatapointSelection::First,
        };

        (dir, config)
    }

    fn output_lines(config: &ReportConfig) -> Vec<String> {
        fs::read_to_string(&config.output)
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_run() {
        let (_dir, config) = setup("a\nb\nmissing\n");

        let buckets = MockBucketProvider::new(&["a", "b", "c"]);
        let metrics = MockMetricsProvider::new()
            .with_size("a", StorageType::StandardStorage, 3.0)
            .with_size("c", StorageType::StandardStorage, 5.0);

        let ret = run(&buckets, &metrics, &config).await.unwrap();

        assert_eq!(ret, 2);

        let expected = vec![
            HEADER.to_string(),
            "a,0,0.000,3.000,3.000,0.000,0.000,0.000".to_string(),
            "b,0,0.000,0.000,0.000,0.000,0.000,0.000".to_string(),
        ];

        assert_eq!(output_lines(&config), expected);
    }

    #[tokio::test]
    async fn test_run_no_buckets() {
        let (_dir, config) = setup("missing\n");

        let buckets = MockBucketProvider::new(&["a"]);
        let metrics = MockMetricsProvider::new();

        let ret = run(&buckets, &metrics, &config).await.unwrap();

        assert_eq!(ret, 0);
        assert_eq!(output_lines(&config), vec![HEADER.to_string()]);
        assert_eq!(metrics.query_count(), 0);
    }

    #[tokio::test]
    async fn test_run_partial_report() {
        let (_dir, config) = setup("a\nb\nc\nd\ne\n");

        let buckets = MockBucketProvider::new(&["a", "b", "c", "d", "e"]);
        let metrics = MockMetricsProvider::new().failing_for("c");

        let ret = run(&buckets, &metrics, &config).await;

        assert!(matches!(ret, Err(Error::Provider { .. })));

        let lines = output_lines(&config);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("a,"));
        assert!(lines[2].starts_with("b,"));
    }

    #[tokio::test]
    async fn test_run_missing_allowlist() {
        let (dir, mut config) = setup("");
        config.buckets_file = dir.path().join("nope.txt");

        let buckets = MockBucketProvider::new(&["a"]);
        let metrics = MockMetricsProvider::new();

        let ret = run(&buckets, &metrics, &config).await;

        assert!(matches!(ret, Err(Error::Config { .. })));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn test_run_unwritable_output() {
        let (dir, mut config) = setup("a\n");
        config.output = dir.path().join("no-such-dir").join("stats.csv");

        let buckets = MockBucketProvider::new(&["a"]);
        let metrics = MockMetricsProvider::new();

        let ret = run(&buckets, &metrics, &config).await;

        assert!(matches!(ret, Err(Error::Io { .. })));
    }
}
