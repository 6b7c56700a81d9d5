// In-memory providers for tests
use async_trait::async_trait;
use crate::fetcher::BYTES_PER_GIB;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::{
    Mutex,
    MutexGuard,
};
use tempfile::TempDir;
use super::{
    Bucket,
    BucketProvider,
    Buckets,
    Datapoint,
    Datapoints,
    Error,
    Metric,
    MetricQuery,
    MetricsProvider,
    Result,
    StorageType,
};

/// Returns a fixed bucket listing, or fails if `fail` is set.
#[derive(Default)]
pub struct MockBucketProvider {
    pub buckets: Buckets,
    pub fail:    bool,
}

impl MockBucketProvider {
    pub fn new(names: &[&str]) -> Self {
        Self {
            buckets: names.iter().map(|name| Bucket::new(*name)).collect(),
            fail:    false,
        }
    }
}

#[async_trait]
impl BucketProvider for MockBucketProvider {
    async fn list_buckets(&self) -> Result<Buckets> {
        if self.fail {
            return Err(Error::provider("ListBuckets", "access denied"));
        }

        Ok(self.buckets.clone())
    }
}

type MetricKey = (String, Metric, StorageType);

/// Answers queries from a table of canned datapoints and records every query
/// it sees. Unknown combinations return no datapoints.
#[derive(Default)]
pub struct MockMetricsProvider {
    datapoints:  HashMap<MetricKey, Datapoints>,
    fail_bucket: Option<String>,
    pub queries: Mutex<Vec<MetricQuery>>,
}

impl MockMetricsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries for `bucket`, `metric` and `storage_type` with a
    /// single datapoint of `average`.
    pub fn with_average(
        self,
        bucket:       &str,
        metric:       Metric,
        storage_type: StorageType,
        average:      f64,
    ) -> Self {
        let datapoint = Datapoint {
            timestamp: None,
            average:   Some(average),
        };

        self.with_datapoints(bucket, metric, storage_type, vec![datapoint])
    }

    pub fn with_datapoints(
        mut self,
        bucket:       &str,
        metric:       Metric,
        storage_type: StorageType,
        datapoints:   Datapoints,
    ) -> Self {
        let key = (bucket.to_string(), metric, storage_type);
        self.datapoints.insert(key, datapoints);
        self
    }

    /// Size `bucket` in `storage_type` at `gib` gibibytes.
    pub fn with_size(
        self,
        bucket:       &str,
        storage_type: StorageType,
        gib:          f64,
    ) -> Self {
        self.with_average(bucket, Metric::BucketSizeBytes, storage_type, gib * BYTES_PER_GIB)
    }

    /// Fail every query made for `bucket`.
    pub fn failing_for(mut self, bucket: &str) -> Self {
        self.fail_bucket = Some(bucket.to_string());
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl MetricsProvider for MockMetricsProvider {
    async fn get_metric_statistics(
        &self,
        query: &MetricQuery,
    ) -> Result<Datapoints> {
        self.queries.lock().unwrap().push(query.clone());

        if self.fail_bucket.as_deref() == Some(query.bucket_name.as_str()) {
            return Err(Error::provider("GetMetricStatistics", "throttled"));
        }

        let key = (query.bucket_name.clone(), query.metric, query.storage_type);
        let datapoints = self.datapoints.get(&key).cloned().unwrap_or_default();

        Ok(datapoints)
    }
}

// Serialises tests that touch the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock and puts back every variable it changed when
/// dropped.
pub struct EnvGuard {
    saved:   Vec<(&'static str, Option<String>)>,
    _dir:    Option<TempDir>,
    _lock:   MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn new() -> Self {
        // A failed test poisons the lock, the environment is still restored.
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        Self {
            saved: Vec::new(),
            _dir:  None,
            _lock: lock,
        }
    }

    /// Environment where the region is only known from the default profile
    /// of a fresh AWS config file.
    pub fn with_profile_region(region: &str) -> Self {
        let mut guard = Self::new();

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, format!("[default]\nregion = {}\n", region)).unwrap();

        guard.set("AWS_CONFIG_FILE", path.to_str().unwrap());
        guard.set("AWS_SHARED_CREDENTIALS_FILE", dir.path().join("credentials").to_str().unwrap());
        guard.set("AWS_EC2_METADATA_DISABLED", "true");
        guard.remove("AWS_REGION");
        guard.remove("AWS_DEFAULT_REGION");
        guard.remove("AWS_PROFILE");
        guard._dir = Some(dir);

        guard
    }

    pub fn set(&mut self, key: &'static str, value: &str) {
        self.save(key);
        env::set_var(key, value);
    }

    pub fn remove(&mut self, key: &'static str) {
        self.save(key);
        env::remove_var(key);
    }

    fn save(&mut self, key: &'static str) {
        self.saved.push((key, env::var(key).ok()));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(key, value),
                None        => env::remove_var(key),
            }
        }
    }
}
