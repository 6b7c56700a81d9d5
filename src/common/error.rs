// Error types shared by the report pipeline
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::io;
use std::path::{
    Path,
    PathBuf,
};
use thiserror::Error;

/// Boxed error returned by the AWS SDK or a test double.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures that abort a report run.
///
/// None of these are retried, the first one to occur ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The bucket allowlist could not be opened or read.
    #[error("failed to read bucket list '{}'", .path.display())]
    Config {
        /// Path of the allowlist.
        path:   PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A call to S3 or CloudWatch failed.
    #[error("{operation} failed")]
    Provider {
        /// The API operation that failed.
        operation: &'static str,
        /// Error reported by the client.
        #[source]
        source:    BoxError,
    },

    /// The report could not be created or written.
    #[error("failed to write report '{}'", .path.display())]
    Io {
        /// Path of the report.
        path:   PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap a client failure of `operation`.
    pub fn provider<E>(operation: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Provider {
            operation,
            source: source.into(),
        }
    }

    /// Wrap a failure writing the report at `path`.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `Result` alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
