// Implement the BucketProvider trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    BucketProvider,
    Buckets,
    Result,
};
use super::client::Client;

#[async_trait]
impl BucketProvider for Client {
    /// Return `Buckets` discovered in S3.
    async fn list_buckets(&self) -> Result<Buckets> {
        Client::list_buckets(self).await
    }
}
