// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    DatapointSelection,
    Region,
    ReportConfig,
    DEFAULT_BUCKETS_FILE,
    DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

// Default per operation timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: &str = "30";

// Default datapoint selection policy
const DEFAULT_DATAPOINT: &str = "first";

// This should match the string values in the DatapointSelection FromStr impl
const VALID_DATAPOINTS: &[&str] = &[
    "first",
    "latest",
];

// Ensures that a region looks vaguely sensible. The SDK will reject regions
// that don't exist when the first request is made.
fn is_valid_aws_region(s: &str) -> Result<String, String> {
    let valid = !s.is_empty() && s.chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    });

    if valid {
        Ok(s.to_string())
    }
    else {
        Err(format!("'{}' is not a valid AWS region name", s))
    }
}

// Create the clap command
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKETS_FILE")
                .env("S3STATS_BUCKETS_FILE")
                .long("buckets-file")
                .short('b')
                .value_name("FILE")
                .help("File listing the buckets to report on, one per line")
                .default_value(DEFAULT_BUCKETS_FILE)
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("OUTPUT")
                .env("S3STATS_OUTPUT")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Where to write the CSV report")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the clients in")
                .value_parser(is_valid_aws_region)
        )
        .arg(
            Arg::new("TIMEOUT")
                .env("S3STATS_TIMEOUT")
                .long("timeout")
                .short('t')
                .value_name("SECONDS")
                .help("Give up on a single AWS request after this long")
                .default_value(DEFAULT_TIMEOUT_SECS)
                .value_parser(value_parser!(u64).range(1..))
        )
        .arg(
            Arg::new("DATAPOINT")
                .env("S3STATS_DATAPOINT")
                .long("datapoint")
                .short('d')
                .value_name("POLICY")
                .help("Datapoint to use when CloudWatch returns several")
                .default_value(DEFAULT_DATAPOINT)
                .value_parser(VALID_DATAPOINTS.to_vec())
        )
}

/// Parse the process arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build the `ClientConfig` from parsed arguments.
pub fn client_config(matches: &ArgMatches) -> ClientConfig {
    // Region::new() already looked at the environment, an explicit --region
    // wins over it.
    let region = match matches.get_one::<String>("REGION") {
        Some(region) => Region::new().set_region(region),
        None         => Region::new(),
    };

    // Always present thanks to the default value.
    let timeout = matches.get_one::<u64>("TIMEOUT")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or(crate::common::DEFAULT_TIMEOUT);

    ClientConfig {
        region,
        timeout,
    }
}

/// Build the `ReportConfig` from parsed arguments.
pub fn report_config(matches: &ArgMatches) -> ReportConfig {
    let defaults = ReportConfig::default();

    let buckets_file = matches.get_one::<PathBuf>("BUCKETS_FILE")
        .cloned()
        .unwrap_or(defaults.buckets_file);

    let output = matches.get_one::<PathBuf>("OUTPUT")
        .cloned()
        .unwrap_or(defaults.output);

    // Possible values are checked by clap, from_str can't fail here.
    let datapoint_selection = matches.get_one::<String>("DATAPOINT")
        .and_then(|s| DatapointSelection::from_str(s).ok())
        .unwrap_or(defaults.datapoint_selection);

    ReportConfig {
        buckets_file,
        output,
        datapoint_selection,
    }
}
