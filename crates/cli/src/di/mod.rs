mod repositories;
mod suffix;
mod use_cases;

pub use repositories::Repositories;
pub use suffix::SuffixServices;
pub use use_cases::UseCases;
