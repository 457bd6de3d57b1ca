pub mod backend;
pub mod suffix;

pub use backend::HandleBackendRequestUseCase;
pub use suffix::RefreshSuffixListUseCase;
