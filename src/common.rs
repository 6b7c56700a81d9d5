// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod client_config;
mod datapoint;
mod error;
mod metric_query;
mod providers;
mod region;
mod report_config;
mod storage_type;

#[cfg(test)]
pub mod mock;

pub use bucket::*;
pub use client_config::*;
pub use datapoint::*;
pub use error::*;
pub use metric_query::*;
pub use providers::*;
pub use region::*;
pub use report_config::*;
pub use storage_type::*;

/// Bucket names as read from the allowlist.
pub type BucketNames = Vec<String>;
