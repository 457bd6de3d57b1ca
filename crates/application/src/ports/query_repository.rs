use async_trait::async_trait;
use ferrous_backend_domain::{DomainError, Query};

#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Inserts the exchange, or updates it when it already has an id. The
    /// assigned id is written back into `query`.
    async fn save(&self, query: &mut Query) -> Result<(), DomainError>;
}
