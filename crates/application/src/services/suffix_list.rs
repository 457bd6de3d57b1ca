use crate::ports::{CacheStore, SuffixListFetcher, SuffixLookup};
use arc_swap::ArcSwap;
use async_trait::async_trait;
use ferrous_backend_domain::DomainError;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{info, warn};

pub const SUFFIX_CACHE_KEY: &str = "public.suffix.dat";

/// In-memory public suffix set backed by a cached copy of the remote list.
pub struct PublicSuffixSet {
    suffixes: ArcSwap<FxHashSet<String>>,
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn SuffixListFetcher>,
}

impl PublicSuffixSet {
    pub fn new(cache: Arc<dyn CacheStore>, fetcher: Arc<dyn SuffixListFetcher>) -> Self {
        Self {
            suffixes: ArcSwap::from_pointee(FxHashSet::default()),
            cache,
            fetcher,
        }
    }

    /// Loads the set from cache, downloading first when the cache is empty.
    ///
    /// An expired cache triggers one download and one more load attempt;
    /// whatever that second attempt returns is final.
    pub async fn open(&self) -> Result<usize, DomainError> {
        if !self.cache.exists(SUFFIX_CACHE_KEY).await? {
            self.download().await?;
        }

        match self.load().await {
            Err(DomainError::CacheExpired(key)) => {
                info!(key = %key, "Public suffix cache expired, refreshing");
                self.download().await?;
                self.load().await
            }
            other => other,
        }
    }

    /// Fetches the remote list, normalizes it and writes it to cache.
    pub async fn download(&self) -> Result<usize, DomainError> {
        let raw = self.fetcher.fetch().await?;
        let suffixes = normalize_suffix_list(&raw);

        if suffixes.is_empty() {
            warn!("Downloaded public suffix list contains no entries");
        }

        let encoded = serde_json::to_string(&suffixes)
            .map_err(|e| DomainError::CacheError(e.to_string()))?;
        self.cache.write(SUFFIX_CACHE_KEY, &encoded).await?;

        info!(entries = suffixes.len(), "Public suffix list downloaded");
        Ok(suffixes.len())
    }

    async fn load(&self) -> Result<usize, DomainError> {
        let raw = self.cache.read(SUFFIX_CACHE_KEY).await?;
        let suffixes: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| DomainError::CacheError(e.to_string()))?;

        let set: FxHashSet<String> = suffixes.into_iter().collect();
        let count = set.len();
        self.suffixes.store(Arc::new(set));

        info!(entries = count, "Public suffix set loaded");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.suffixes.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.load().is_empty()
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.load().contains(suffix)
    }
}

#[async_trait]
impl SuffixLookup for PublicSuffixSet {
    async fn is_public_suffix(&self, suffix: &str) -> Result<bool, DomainError> {
        Ok(self.contains(suffix))
    }
}

/// Normalizes one line of the public suffix list.
///
/// Blank and comment lines yield `None`. Exception (`!`) and wildcard (`*.`)
/// markers are stripped so only the bare suffix remains.
pub fn normalize_suffix_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
        return None;
    }

    let rule = line.split_whitespace().next()?;
    let rule = rule.strip_prefix('!').unwrap_or(rule);
    let rule = rule.strip_prefix("*.").unwrap_or(rule);

    if rule.is_empty() || rule == "*" {
        return None;
    }

    Some(rule.to_lowercase())
}

pub fn normalize_suffix_list(text: &str) -> Vec<String> {
    text.lines().filter_map(normalize_suffix_line).collect()
}
