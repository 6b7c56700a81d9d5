// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::client::Client as S3Client;
use crate::common::{
    Bucket,
    Buckets,
    ClientConfig,
    Error,
    Result,
};
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    pub async fn new(config: &ClientConfig) -> Self {
        debug!("new: Creating S3Client");

        let sdk_config = config.load_sdk_config().await;

        let client = S3Client::new(&sdk_config);

        Self {
            client,
        }
    }

    /// Returns every bucket owned by the account, in the order S3 lists
    /// them.
    pub async fn list_buckets(&self) -> Result<Buckets> {
        debug!("list_buckets: Listing...");

        let mut buckets            = Buckets::new();
        let mut continuation_token = None;

        // We loop until we've processed everything.
        loop {
            let output = self.client.list_buckets()
                .set_continuation_token(continuation_token)
                .send()
                .await
                .map_err(|e| Error::provider("ListBuckets", e))?;

            debug!("list_buckets: API returned: {:#?}", output);

            buckets.extend(
                output.buckets()
                    .iter()
                    .filter_map(|b| b.name())
                    .map(Bucket::new)
            );

            // If there was a continuation token, use it, otherwise the loop
            // is done.
            match output.continuation_token() {
                Some(t) => continuation_token = Some(t.to_string()),
                None    => break,
            }
        }

        Ok(buckets)
    }
}
