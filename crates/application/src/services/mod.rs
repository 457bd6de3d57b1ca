mod result_builder;
mod suffix_list;
mod suffix_resolver;

pub use result_builder::ResultBuilder;
pub use suffix_list::{normalize_suffix_line, normalize_suffix_list, PublicSuffixSet, SUFFIX_CACHE_KEY};
pub use suffix_resolver::{split_port, SuffixResolver, TldSuffixLookup};
