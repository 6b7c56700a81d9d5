// Imports all of the components needed for cloudwatch::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Conversion of CloudWatch `Datapoint`s into our own `Datapoint`.
mod datapoint;

/// Implementation of the `MetricsProvider` trait for our CloudWatch `Client`.
mod metrics_provider;

/// CloudWatch `Client`.
mod client;

pub use client::*;
