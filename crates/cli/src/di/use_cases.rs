use super::{Repositories, SuffixServices};
use ferrous_backend_application::use_cases::{
    HandleBackendRequestUseCase, RefreshSuffixListUseCase,
};
use ferrous_backend_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub handle_request: Arc<HandleBackendRequestUseCase>,
    pub refresh_suffix_list: Option<Arc<RefreshSuffixListUseCase>>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, suffix: &SuffixServices) -> Self {
        let handle_request = HandleBackendRequestUseCase::new(
            repos.zone.clone(),
            repos.record.clone(),
            repos.query.clone(),
            suffix.resolver.clone(),
            &config.backend.hostmaster,
        )
        .with_query_logging(config.database.log_queries);

        Self {
            handle_request: Arc::new(handle_request),
            refresh_suffix_list: suffix
                .public_list
                .clone()
                .map(|set| Arc::new(RefreshSuffixListUseCase::new(set))),
        }
    }
}
