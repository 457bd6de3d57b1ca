mod refresh_suffix_list;

pub use refresh_suffix_list::RefreshSuffixListUseCase;
