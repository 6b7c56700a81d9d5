// Capabilities the report pipeline needs from AWS
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Buckets,
    Datapoints,
    MetricQuery,
    Result,
};

/// `BucketProvider` lists the buckets visible to the caller's credentials.
#[async_trait]
pub trait BucketProvider {
    /// Returns every bucket in the account, in listing order.
    async fn list_buckets(&self) -> Result<Buckets>;
}

/// `MetricsProvider` runs a single statistics query.
#[async_trait]
pub trait MetricsProvider {
    /// Returns the datapoints for `query`, in the order the service returned
    /// them.
    ///
    /// An empty list is a valid answer and must not be turned into an error.
    async fn get_metric_statistics(
        &self,
        query: &MetricQuery,
    ) -> Result<Datapoints>;
}
