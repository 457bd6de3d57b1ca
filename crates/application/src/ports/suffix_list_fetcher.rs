use async_trait::async_trait;
use ferrous_backend_domain::DomainError;

#[async_trait]
pub trait SuffixListFetcher: Send + Sync {
    /// Raw newline-delimited public suffix list.
    async fn fetch(&self) -> Result<String, DomainError>;
}
