// Aggregates per storage type sizes into storage class categories
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Bucket,
    MetricsProvider,
    Result,
    StorageType,
};
use crate::fetcher::MetricFetcher;
use std::fmt;
use tracing::debug;

/// Groups of `StorageType`s that are reported together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    /// S3 Standard.
    Standard,
    /// Standard-IA and One Zone-IA.
    InfrequentAccess,
    /// All Intelligent-Tiering access tiers.
    IntelligentTiering,
    /// Glacier Instant Retrieval, Glacier Flexible Retrieval and Deep
    /// Archive.
    Glacier,
    /// Per-object metadata S3 stores alongside archived objects. Not part of
    /// the bucket total.
    GlacierOverhead,
}

impl Category {
    /// Every category, in the order they're computed.
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::InfrequentAccess,
        Self::IntelligentTiering,
        Self::Glacier,
        Self::GlacierOverhead,
    ];

    /// The storage types summed to give the size of this category.
    pub fn storage_types(&self) -> &'static [StorageType] {
        match self {
            Self::Standard => &[
                StorageType::StandardStorage,
            ],
            Self::InfrequentAccess => &[
                StorageType::StandardIAStorage,
                StorageType::OneZoneIAStorage,
            ],
            Self::IntelligentTiering => &[
                StorageType::IntelligentTieringFAStorage,
                StorageType::IntelligentTieringIAStorage,
                StorageType::IntelligentTieringAAStorage,
                StorageType::IntelligentTieringAIAStorage,
                StorageType::IntelligentTieringDAAStorage,
            ],
            Self::Glacier => &[
                StorageType::GlacierInstantRetrievalStorage,
                StorageType::GlacierStorage,
                StorageType::DeepArchiveStorage,
            ],
            Self::GlacierOverhead => &[
                StorageType::GlacierInstantRetrievalSizeOverhead,
                StorageType::GlacierObjectOverhead,
                StorageType::DeepArchiveObjectOverhead,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard           => "Standard",
            Self::InfrequentAccess   => "IA",
            Self::IntelligentTiering => "Intelligent Tiering",
            Self::Glacier            => "Glacier",
            Self::GlacierOverhead    => "Glacier Overhead",
        };

        f.write_str(name)
    }
}

/// Storage usage of a single bucket. Sizes are in GiB and unrounded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BucketReport {
    /// Name of the bucket.
    pub name: String,

    /// Number of objects, truncated to a whole number.
    pub object_count: u64,

    /// Archive metadata overhead.
    pub glacier_overhead: f64,

    /// Size in S3 Standard.
    pub standard: f64,

    /// Size in the infrequent access classes.
    pub infrequent_access: f64,

    /// Size in Intelligent-Tiering.
    pub intelligent_tiering: f64,

    /// Size in the Glacier classes.
    pub glacier: f64,
}

impl BucketReport {
    /// Total size of the bucket. Glacier overhead isn't included.
    pub fn total(&self) -> f64 {
        self.standard
            + self.infrequent_access
            + self.intelligent_tiering
            + self.glacier
    }

    fn set(&mut self, category: Category, size: f64) {
        let field = match category {
            Category::Standard           => &mut self.standard,
            Category::InfrequentAccess   => &mut self.infrequent_access,
            Category::IntelligentTiering => &mut self.intelligent_tiering,
            Category::Glacier            => &mut self.glacier,
            Category::GlacierOverhead    => &mut self.glacier_overhead,
        };

        *field = size;
    }
}

/// `SizeAggregator` builds a `BucketReport` from individual metrics.
pub struct SizeAggregator<'a, M> {
    fetcher: MetricFetcher<'a, M>,
}

impl<'a, M> SizeAggregator<'a, M>
where
    M: MetricsProvider,
{
    /// Return a new `SizeAggregator` using `fetcher`.
    pub fn new(fetcher: MetricFetcher<'a, M>) -> Self {
        Self {
            fetcher,
        }
    }

    /// Returns the size of `category` in `bucket`, in GiB.
    pub async fn category_size(
        &self,
        bucket:   &str,
        category: Category,
    ) -> Result<f64> {
        let mut size = 0.0;

        // Queries are independent, but we keep them sequential so we stay
        // well inside CloudWatch's request rate.
        for storage_type in category.storage_types() {
            size += self.fetcher.bucket_size_gib(bucket, *storage_type).await?;
        }

        debug!("category_size: {} for '{}' is {}", category, bucket, size);

        Ok(size)
    }

    /// Compute the full `BucketReport` for `bucket`, printing a progress
    /// line for each category.
    pub async fn aggregate(&self, bucket: &Bucket) -> Result<BucketReport> {
        let name = &bucket.name;

        let mut report = BucketReport {
            name: name.clone(),
            ..Default::default()
        };

        for category in Category::ALL {
            println!("   - calculating {}", category);

            let size = self.category_size(name, category).await?;
            report.set(category, size);
        }

        // Float to int casts truncate towards zero, which is what we want.
        let count = self.fetcher.bucket_object_count(name).await?;
        report.object_count = count as u64;

        debug!("aggregate: {:?}", report);

        Ok(report)
    }
}
