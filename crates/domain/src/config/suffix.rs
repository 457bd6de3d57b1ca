use serde::{Deserialize, Serialize};
use std::fmt;

pub const PUBLIC_SUFFIX_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Where the set of known public suffixes comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixSource {
    /// Public suffix list, cached on disk and refreshed from `list_url`.
    List,
    /// The `dns_domain_tlds` table.
    Database,
}

impl fmt::Display for SuffixSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixSource::List => write!(f, "list"),
            SuffixSource::Database => write!(f, "database"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuffixConfig {
    #[serde(default = "default_source")]
    pub source: SuffixSource,

    #[serde(default = "default_list_url")]
    pub list_url: String,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Age after which the cached list is reported expired.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for SuffixConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            list_url: default_list_url(),
            cache_dir: default_cache_dir(),
            cache_ttl_secs: default_cache_ttl_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_source() -> SuffixSource {
    SuffixSource::List
}

fn default_list_url() -> String {
    PUBLIC_SUFFIX_LIST_URL.to_string()
}

fn default_cache_dir() -> String {
    "./cache".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    604_800
}

fn default_refresh_interval_secs() -> u64 {
    86_400
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
