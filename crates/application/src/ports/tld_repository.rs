use async_trait::async_trait;
use ferrous_backend_domain::DomainError;

#[async_trait]
pub trait TldRepository: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;
}
