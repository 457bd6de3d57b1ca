mod cache_store;
mod query_repository;
mod record_repository;
mod suffix_list_fetcher;
mod suffix_lookup;
mod tld_repository;
mod zone_repository;

pub use cache_store::CacheStore;
pub use query_repository::QueryRepository;
pub use record_repository::RecordRepository;
pub use suffix_list_fetcher::SuffixListFetcher;
pub use suffix_lookup::SuffixLookup;
pub use tld_repository::TldRepository;
pub use zone_repository::ZoneRepository;
