use async_trait::async_trait;
use ferrous_backend_application::ports::CacheStore;
use ferrous_backend_domain::DomainError;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, error};

/// One file per key under `dir`; entries older than `ttl` (by mtime) read as expired.
pub struct FileCacheStore {
    dir: PathBuf,
    ttl: Duration,
}

impl FileCacheStore {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    async fn is_expired(&self, path: &Path) -> Result<bool, DomainError> {
        let modified = tokio::fs::metadata(path)
            .await
            .and_then(|m| m.modified())
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);

        Ok(age > self.ttl)
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        tokio::fs::try_exists(self.path_for(key))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn read(&self, key: &str) -> Result<String, DomainError> {
        let path = self.path_for(key);

        if self.is_expired(&path).await? {
            debug!(key = %key, "Cache entry expired");
            return Err(DomainError::CacheExpired(key.to_string()));
        }

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read cache entry");
            DomainError::CacheError(e.to_string())
        })
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let path = self.path_for(key);
        tokio::fs::write(&path, value).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to write cache entry");
            DomainError::CacheError(e.to_string())
        })
    }
}
