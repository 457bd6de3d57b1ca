mod file_cache;
mod http_fetcher;

pub use file_cache::FileCacheStore;
pub use http_fetcher::HttpSuffixListFetcher;
