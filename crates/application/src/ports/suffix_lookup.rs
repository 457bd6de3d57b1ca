use async_trait::async_trait;
use ferrous_backend_domain::DomainError;

/// Membership test against the set of known public suffixes.
#[async_trait]
pub trait SuffixLookup: Send + Sync {
    /// `suffix` is lower-cased and dot-joined, e.g. `com` or `co.uk`.
    async fn is_public_suffix(&self, suffix: &str) -> Result<bool, DomainError>;
}
