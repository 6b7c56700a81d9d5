// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::RegionProviderChain;
use aws_config::timeout::TimeoutConfig;
use aws_config::{
    BehaviorVersion,
    SdkConfig,
};
use super::Region;
use std::time::Duration;
use tracing::debug;

/// Default bound on a single S3 or CloudWatch operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// AWS client configuration.
#[derive(Debug)]
pub struct ClientConfig {
    /// The region that our AWS clients should be created in.
    pub region: Region,

    /// Upper bound on each API operation, including retries performed by
    /// the SDK itself.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    /// Returns a default `ClientConfig`.
    ///
    /// ```rust
    /// ClientConfig {
    ///     region:  Region::new(),
    ///     timeout: Duration::from_secs(30),
    /// }
    /// ```
    fn default() -> Self {
        Self {
            region:  Region::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load the shared AWS SDK configuration for our clients.
    ///
    /// Our `Region` is tried first, when it has no region the SDK's default
    /// chain (environment, profile, instance metadata) decides.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        debug!("load_sdk_config: Preferring region '{}'", self.region.name());

        let region = RegionProviderChain::first_try(self.region.clone())
            .or_default_provider();

        let timeouts = TimeoutConfig::builder()
            .operation_timeout(self.timeout)
            .build();

        aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .timeout_config(timeouts)
            .load()
            .await
    }
}
