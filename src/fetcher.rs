// Fetches single metric values from a MetricsProvider
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::Utc;
use crate::common::{
    DatapointSelection,
    Metric,
    MetricQuery,
    MetricsProvider,
    Result,
    StorageType,
};
use tracing::debug;

/// Bytes in a binary gigabyte (GiB).
pub const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// `MetricFetcher` reduces a statistics query to a single value.
pub struct MetricFetcher<'a, M> {
    provider:  &'a M,
    selection: DatapointSelection,
}

impl<'a, M> MetricFetcher<'a, M>
where
    M: MetricsProvider,
{
    /// Return a new `MetricFetcher` querying `provider`.
    pub fn new(provider: &'a M, selection: DatapointSelection) -> Self {
        Self {
            provider,
            selection,
        }
    }

    /// Returns the daily `Average` of `metric` for `bucket` and
    /// `storage_type` over the last two days.
    ///
    /// No datapoints, or a datapoint without an average, yields `0.0`.
    pub async fn fetch_average(
        &self,
        bucket:       &str,
        metric:       Metric,
        storage_type: StorageType,
    ) -> Result<f64> {
        let query      = MetricQuery::new(bucket, metric, storage_type, Utc::now());
        let datapoints = self.provider.get_metric_statistics(&query).await?;

        let average = self.selection
            .select(&datapoints)
            .and_then(|datapoint| datapoint.average)
            .unwrap_or(0.0);

        debug!(
            "fetch_average: {} {} for '{}' from {} datapoints is {}",
            metric.as_str(),
            storage_type,
            bucket,
            datapoints.len(),
            average,
        );

        Ok(average)
    }

    /// Returns the size of `bucket` in `storage_type`, in GiB.
    pub async fn bucket_size_gib(
        &self,
        bucket:       &str,
        storage_type: StorageType,
    ) -> Result<f64> {
        let bytes = self.fetch_average(
            bucket,
            Metric::BucketSizeBytes,
            storage_type,
        ).await?;

        Ok(bytes / BYTES_PER_GIB)
    }

    /// Returns the number of objects in `bucket` across all storage types.
    ///
    /// This is the raw average, callers decide how to make it whole.
    pub async fn bucket_object_count(&self, bucket: &str) -> Result<f64> {
        self.fetch_average(
            bucket,
            Metric::NumberOfObjects,
            StorageType::AllStorageTypes,
        ).await
    }
}
