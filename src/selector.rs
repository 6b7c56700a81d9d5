// Selects the buckets to report on
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketNames,
    BucketProvider,
    Buckets,
    Error,
    Result,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the allowlist at `path`, one bucket name per line.
///
/// Empty lines are skipped, everything else is taken verbatim.
pub fn read_allowlist(path: &Path) -> Result<BucketNames> {
    debug!("read_allowlist: Reading '{}'", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

    let names: BucketNames = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    debug!("read_allowlist: Found {} names", names.len());

    Ok(names)
}

/// Keep the `buckets` whose name appears in `allowlist`.
///
/// Listing order is preserved. Names that don't match any bucket are
/// dropped without complaint, so a typo in the allowlist just means the
/// bucket is missing from the report.
pub fn filter_buckets(buckets: Buckets, allowlist: &[String]) -> Buckets {
    let allowed: HashSet<&str> = allowlist.iter()
        .map(String::as_str)
        .collect();

    buckets.into_iter()
        .filter(|bucket| allowed.contains(bucket.name.as_str()))
        .collect()
}

/// Return the buckets visible to `provider` that are named in the allowlist
/// at `path`.
pub async fn select<B>(provider: &B, path: &Path) -> Result<Buckets>
where
    B: BucketProvider,
{
    let allowlist = read_allowlist(path)?;
    let buckets   = provider.list_buckets().await?;

    debug!("select: {} buckets listed", buckets.len());

    let selected = filter_buckets(buckets, &allowlist);

    debug!("select: {} buckets selected", selected.len());

    Ok(selected)
}
