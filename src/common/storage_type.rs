// S3 storage types as used by the CloudWatch StorageType dimension
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;

/// Values of the `StorageType` dimension on `AWS/S3` daily storage metrics.
///
/// See the "Amazon S3 daily storage metrics for buckets in CloudWatch"
/// section of the S3 user guide for the meaning of each value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StorageType {
    /// Only valid with `NumberOfObjects`.
    AllStorageTypes,
    StandardStorage,
    StandardIAStorage,
    OneZoneIAStorage,
    IntelligentTieringFAStorage,
    IntelligentTieringIAStorage,
    IntelligentTieringAAStorage,
    IntelligentTieringAIAStorage,
    IntelligentTieringDAAStorage,
    GlacierInstantRetrievalStorage,
    GlacierStorage,
    DeepArchiveStorage,
    GlacierInstantRetrievalSizeOverhead,
    GlacierObjectOverhead,
    DeepArchiveObjectOverhead,
}

impl StorageType {
    /// The dimension value CloudWatch expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllStorageTypes                     => "AllStorageTypes",
            Self::StandardStorage                     => "StandardStorage",
            Self::StandardIAStorage                   => "StandardIAStorage",
            Self::OneZoneIAStorage                    => "OneZoneIAStorage",
            Self::IntelligentTieringFAStorage         => "IntelligentTieringFAStorage",
            Self::IntelligentTieringIAStorage         => "IntelligentTieringIAStorage",
            Self::IntelligentTieringAAStorage         => "IntelligentTieringAAStorage",
            Self::IntelligentTieringAIAStorage        => "IntelligentTieringAIAStorage",
            Self::IntelligentTieringDAAStorage        => "IntelligentTieringDAAStorage",
            Self::GlacierInstantRetrievalStorage      => "GlacierInstantRetrievalStorage",
            Self::GlacierStorage                      => "GlacierStorage",
            Self::DeepArchiveStorage                  => "DeepArchiveStorage",
            Self::GlacierInstantRetrievalSizeOverhead => "GlacierInstantRetrievalSizeOverhead",
            Self::GlacierObjectOverhead               => "GlacierObjectOverhead",
            Self::DeepArchiveObjectOverhead           => "DeepArchiveObjectOverhead",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
