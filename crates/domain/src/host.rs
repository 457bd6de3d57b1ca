use serde::{Deserialize, Serialize};

/// Result of splitting a host name around its public suffix.
///
/// `domain` and `tld` are both present when a known suffix matched and both
/// absent when the source was treated as an opaque host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDecomposition {
    pub source: String,
    pub host: Option<String>,
    pub domain: Option<String>,
    pub tld: Option<String>,
    pub port: u16,
}

impl HostDecomposition {
    /// The whole source is kept as the host, no suffix was recognized.
    pub fn opaque(source: &str, port: u16) -> Self {
        Self {
            source: source.to_string(),
            host: Some(source.to_string()),
            domain: None,
            tld: None,
            port,
        }
    }

    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }
}
