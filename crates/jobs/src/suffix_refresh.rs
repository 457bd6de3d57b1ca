use ferrous_backend_application::use_cases::RefreshSuffixListUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically reloads the public suffix set.
///
/// The first tick is consumed immediately: the set is already loaded during
/// bootstrap. Default interval: 24 h (86 400 s).
pub struct SuffixListRefreshJob {
    refresh: Arc<RefreshSuffixListUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SuffixListRefreshJob {
    pub fn new(refresh: Arc<RefreshSuffixListUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: 86_400,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting suffix list refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SuffixListRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute().await {
                            Ok(entries) => info!(entries, "SuffixListRefreshJob: refresh completed"),
                            Err(e) => error!(error = %e, "SuffixListRefreshJob: refresh failed"),
                        }
                    }
                }
            }
        });
    }
}
