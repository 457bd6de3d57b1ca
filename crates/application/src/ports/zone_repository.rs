use async_trait::async_trait;
use ferrous_backend_domain::{DomainError, Zone};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Active, non-deleted zone whose name equals `name` ignoring case.
    async fn find_active_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError>;
}
