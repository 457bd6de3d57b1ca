use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Zone [{0}] Not Found")]
    ZoneNotFound(String),

    #[error("Zone [{0}] Has No Name Servers")]
    ZoneWithoutNameServers(String),

    #[error("Invalid parameters for [{method}]: {reason}")]
    InvalidParameters { method: String, reason: String },

    #[error("Invalid request payload: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache entry expired: {0}")]
    CacheExpired(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Suffix list fetch error: {0}")]
    SuffixListFetchError(String),
}
