use async_trait::async_trait;
use ferrous_backend_domain::DomainError;

#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Fails with [`DomainError::CacheExpired`] when the entry outlived its TTL.
    async fn read(&self, key: &str) -> Result<String, DomainError>;

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
