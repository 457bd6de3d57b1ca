pub mod runner;
pub mod suffix_refresh;

pub use runner::JobRunner;
pub use suffix_refresh::SuffixListRefreshJob;
