use super::Repositories;
use ferrous_backend_application::ports::SuffixLookup;
use ferrous_backend_application::services::{PublicSuffixSet, SuffixResolver, TldSuffixLookup};
use ferrous_backend_domain::config::SuffixConfig;
use ferrous_backend_domain::SuffixSource;
use ferrous_backend_infrastructure::suffix::{FileCacheStore, HttpSuffixListFetcher};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct SuffixServices {
    pub resolver: Arc<SuffixResolver>,
    /// Present only when suffixes come from the public list.
    pub public_list: Option<Arc<PublicSuffixSet>>,
}

impl SuffixServices {
    pub async fn new(config: &SuffixConfig, repos: &Repositories) -> anyhow::Result<Self> {
        match config.source {
            SuffixSource::List => {
                let cache = Arc::new(FileCacheStore::new(
                    &config.cache_dir,
                    Duration::from_secs(config.cache_ttl_secs),
                ));
                let fetcher = Arc::new(HttpSuffixListFetcher::new(
                    &config.list_url,
                    Duration::from_secs(config.fetch_timeout_secs),
                )?);

                let set = Arc::new(PublicSuffixSet::new(cache, fetcher));
                let entries = set.open().await?;
                info!(entries, cache_dir = %config.cache_dir, "Public suffix list ready");

                Ok(Self {
                    resolver: Arc::new(SuffixResolver::new(
                        set.clone() as Arc<dyn SuffixLookup>
                    )),
                    public_list: Some(set),
                })
            }
            SuffixSource::Database => {
                info!("Resolving suffixes from dns_domain_tlds");
                let lookup = Arc::new(TldSuffixLookup::new(repos.tld.clone()));

                Ok(Self {
                    resolver: Arc::new(SuffixResolver::new(lookup)),
                    public_list: None,
                })
            }
        }
    }
}
