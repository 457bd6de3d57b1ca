use async_trait::async_trait;
use ferrous_backend_domain::{DomainError, RecordFilter, ZoneRecord};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn find_all(&self, filter: &RecordFilter) -> Result<Vec<ZoneRecord>, DomainError>;
}
