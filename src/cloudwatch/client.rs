// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension,
    StandardUnit,
    Statistic,
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    ClientConfig,
    Datapoint,
    Datapoints,
    Error,
    MetricQuery,
    Result,
    Unit,
};
use tracing::debug;

/// Namespace of the S3 daily storage metrics.
const S3_NAMESPACE: &str = "AWS/S3";

/// A `CloudWatch` `Client`
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,
}

impl Client {
    /// Return a new `Client` with the given `ClientConfig`.
    pub async fn new(config: &ClientConfig) -> Self {
        debug!("new: Creating CloudWatchClient");

        let sdk_config = config.load_sdk_config().await;

        let client = CloudWatchClient::new(&sdk_config);

        Self {
            client,
        }
    }

    /// Returns the `Average` datapoints CloudWatch holds for `query`.
    ///
    /// The datapoints are returned in the order CloudWatch sent them, which
    /// may be empty if nothing was published during the query window.
    pub async fn get_metric_statistics(
        &self,
        query: &MetricQuery,
    ) -> Result<Datapoints> {
        debug!("get_metric_statistics: Processing {:?}", query);

        let period = i32::try_from(query.period.as_secs())
            .map_err(|e| Error::provider("GetMetricStatistics", e))?;

        let unit = match query.unit {
            Unit::Bytes => StandardUnit::Bytes,
            Unit::Count => StandardUnit::Count,
        };

        let dimensions = vec![
            Dimension::builder()
                .name("BucketName")
                .value(query.bucket_name.clone())
                .build(),
            Dimension::builder()
                .name("StorageType")
                .value(query.storage_type.as_str())
                .build(),
        ];

        let input = self.client.get_metric_statistics()
            .end_time(DateTime::from_chrono_utc(query.end_time))
            .metric_name(query.metric.as_str())
            .namespace(S3_NAMESPACE)
            .period(period)
            .set_dimensions(Some(dimensions))
            .start_time(DateTime::from_chrono_utc(query.start_time))
            .statistics(Statistic::Average)
            .unit(unit);

        debug!("{:?}", input);

        let output = input
            .send()
            .await
            .map_err(|e| Error::provider("GetMetricStatistics", e))?;

        debug!("get_metric_statistics: API returned: {:#?}", output);

        let datapoints = output.datapoints()
            .iter()
            .map(Datapoint::from)
            .collect();

        Ok(datapoints)
    }
}
