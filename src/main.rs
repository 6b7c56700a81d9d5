// s3stats: A tool for reporting storage class usage of AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod cli;
mod cloudwatch;
mod common;
mod driver;
mod fetcher;
mod report;
mod s3;
mod selector;

// Log level used when RUST_LOG isn't set.
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for progress output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches       = cli::parse_args();
    let client_config = cli::client_config(&matches);
    let report_config = cli::report_config(&matches);

    debug!("Client config: {:?}", client_config);
    debug!("Report config: {:?}", report_config);

    let s3_client         = s3::Client::new(&client_config).await;
    let cloudwatch_client = cloudwatch::Client::new(&client_config).await;

    let count = driver::run(&s3_client, &cloudwatch_client, &report_config)
        .await
        .context("Failed to generate bucket stats")?;

    println!("Generated stats for {} buckets.", count);

    Ok(())
}
