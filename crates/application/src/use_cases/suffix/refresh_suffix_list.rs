use crate::services::PublicSuffixSet;
use ferrous_backend_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Reloads the public suffix set, downloading a fresh list when the cache is stale.
pub struct RefreshSuffixListUseCase {
    suffixes: Arc<PublicSuffixSet>,
}

impl RefreshSuffixListUseCase {
    pub fn new(suffixes: Arc<PublicSuffixSet>) -> Self {
        Self { suffixes }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let count = self.suffixes.open().await?;
        info!(entries = count, "Public suffix list refreshed");
        Ok(count)
    }
}
