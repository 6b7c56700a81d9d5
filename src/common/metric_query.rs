// A single CloudWatch statistics query
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};
use std::time::Duration;
use super::StorageType;

const ONE_DAY: Duration = Duration::from_secs(86_400);

/// S3 publishes its storage metrics once a day, at no fixed time. Looking
/// back a single day can miss the latest value, two days always catches it.
pub const LOOKBACK_DAYS: i64 = 2;

/// Aggregation period of the requested statistics.
pub const PERIOD: Duration = ONE_DAY;

/// The `AWS/S3` metrics that we query.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Metric {
    /// Bytes stored in a bucket for a storage type.
    BucketSizeBytes,
    /// Objects stored in a bucket, only reported for `AllStorageTypes`.
    NumberOfObjects,
}

impl Metric {
    /// The CloudWatch metric name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BucketSizeBytes => "BucketSizeBytes",
            Self::NumberOfObjects => "NumberOfObjects",
        }
    }

    /// The unit CloudWatch reports this metric in.
    pub fn unit(&self) -> Unit {
        match self {
            Self::BucketSizeBytes => Unit::Bytes,
            Self::NumberOfObjects => Unit::Count,
        }
    }
}

/// Unit of a queried statistic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    /// Sizes.
    Bytes,
    /// Object counts.
    Count,
}

/// Everything needed to request the `Average` statistic of one metric for
/// one bucket and storage type.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricQuery {
    /// Value of the `BucketName` dimension.
    pub bucket_name: String,

    /// The metric being queried.
    pub metric: Metric,

    /// Value of the `StorageType` dimension.
    pub storage_type: StorageType,

    /// Unit the statistic is requested in.
    pub unit: Unit,

    /// Start of the query window, inclusive.
    pub start_time: DateTime<Utc>,

    /// End of the query window, exclusive.
    pub end_time: DateTime<Utc>,

    /// Granularity of the returned datapoints.
    pub period: Duration,
}

impl MetricQuery {
    /// Build a query for the trailing `LOOKBACK_DAYS` window ending at `now`.
    pub fn new(
        bucket_name:  &str,
        metric:       Metric,
        storage_type: StorageType,
        now:          DateTime<Utc>,
    ) -> Self {
        let lookback = chrono::Duration::days(LOOKBACK_DAYS);

        Self {
            bucket_name: bucket_name.to_owned(),
            metric,
            storage_type,
            unit:        metric.unit(),
            start_time:  now - lookback,
            end_time:    now,
            period:      PERIOD,
        }
    }
}
