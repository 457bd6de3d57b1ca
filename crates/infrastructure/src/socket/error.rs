use thiserror::Error;

#[derive(Error, Debug)]
pub enum SocketError {
    #[error("Failed to remove stale socket {path}: {source}")]
    StaleArtifact {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind socket {path}: {source}")]
    Bind {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection manager already started")]
    AlreadyStarted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
