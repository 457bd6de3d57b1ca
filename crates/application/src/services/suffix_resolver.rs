use crate::ports::{SuffixLookup, TldRepository};
use async_trait::async_trait;
use ferrous_backend_domain::{DomainError, HostDecomposition};
use std::sync::Arc;

/// Splits host names into host, registrable domain and public suffix.
///
/// Every call builds its own [`HostDecomposition`]; the resolver holds no
/// per-call state, so concurrent parses never observe each other.
pub struct SuffixResolver {
    suffixes: Arc<dyn SuffixLookup>,
}

impl SuffixResolver {
    pub fn new(suffixes: Arc<dyn SuffixLookup>) -> Self {
        Self { suffixes }
    }

    pub async fn parse(&self, hostname: &str) -> Result<HostDecomposition, DomainError> {
        let (name, port) = split_port(hostname);

        let labels: Vec<&str> = name
            .trim()
            .split('.')
            .filter(|label| !label.is_empty())
            .collect();

        if labels.len() < 2 {
            return Ok(HostDecomposition::opaque(hostname, port));
        }

        // Shortest suffix first: the set holds complete suffixes only.
        for start in (1..labels.len()).rev() {
            let suffix = labels[start..].join(".");
            if !self
                .suffixes
                .is_public_suffix(&suffix.to_lowercase())
                .await?
            {
                continue;
            }

            let host = if start > 1 {
                Some(labels[..start - 1].join("."))
            } else {
                None
            };

            return Ok(HostDecomposition {
                source: hostname.to_string(),
                host,
                domain: Some(format!("{}.{}", labels[start - 1], suffix)),
                tld: Some(suffix),
                port,
            });
        }

        Ok(HostDecomposition::opaque(hostname, port))
    }
}

/// Splits a trailing `:<digits>` port off `source`; port 0 when absent.
pub fn split_port(source: &str) -> (&str, u16) {
    if let Some(idx) = source.rfind(':') {
        let digits = &source[idx + 1..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(port) = digits.parse::<u16>() {
                return (&source[..idx], port);
            }
        }
    }
    (source, 0)
}

/// Suffix membership answered by the `dns_domain_tlds` table.
pub struct TldSuffixLookup {
    tlds: Arc<dyn TldRepository>,
}

impl TldSuffixLookup {
    pub fn new(tlds: Arc<dyn TldRepository>) -> Self {
        Self { tlds }
    }
}

#[async_trait]
impl SuffixLookup for TldSuffixLookup {
    async fn is_public_suffix(&self, suffix: &str) -> Result<bool, DomainError> {
        self.tlds.exists_by_name(suffix).await
    }
}
