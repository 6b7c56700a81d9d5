// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket discovered through the bucket listing.
///
/// Only the name is tracked, it is the sole identity we need to query
/// CloudWatch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    /// The bucket name, exactly as S3 reported it.
    pub name: String,
}

impl Bucket {
    /// Return a new `Bucket` with the given `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
        }
    }
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
