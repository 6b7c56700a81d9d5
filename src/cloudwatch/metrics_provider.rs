// Implements the MetricsProvider trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    Datapoints,
    MetricQuery,
    MetricsProvider,
    Result,
};
use super::client::Client;

#[async_trait]
impl MetricsProvider for Client {
    /// Run `query` against CloudWatch.
    async fn get_metric_statistics(
        &self,
        query: &MetricQuery,
    ) -> Result<Datapoints> {
        Client::get_metric_statistics(self, query).await
    }
}
