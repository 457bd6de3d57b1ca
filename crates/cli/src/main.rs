use clap::Parser;
use ferrous_backend_domain::CliOverrides;
use ferrous_backend_infrastructure::backend_handler::RemoteBackendHandler;
use ferrous_backend_infrastructure::socket::ConnectionManager;
use ferrous_backend_jobs::{JobRunner, SuffixListRefreshJob};
use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-backend")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Backend - PowerDNS remote backend over a Unix socket")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Unix socket path
    #[arg(short = 's', long, value_name = "PATH")]
    socket: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        socket_path: cli.socket.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Backend v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let suffix = di::SuffixServices::new(&config.suffix, &repos).await?;
    let use_cases = di::UseCases::new(&config, &repos, &suffix);

    let handler = Arc::new(RemoteBackendHandler::new(use_cases.handle_request.clone()));
    let manager = Arc::new(ConnectionManager::new(
        &config.server.socket_path,
        config.server.read_buffer_size,
        handler,
    ));

    if let Err(e) = manager.start().await {
        error!(error = %e, path = %config.server.socket_path, "Backend failed to start");
        return Err(e.into());
    }

    let shutdown = CancellationToken::new();
    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(refresh) = use_cases.refresh_suffix_list.clone() {
        jobs = jobs.with_suffix_refresh(
            SuffixListRefreshJob::new(refresh).with_interval(config.suffix.refresh_interval_secs),
        );
    }
    jobs.start().await;

    info!(
        socket = %config.server.socket_path,
        suffix_source = %config.suffix.source,
        "Backend Started"
    );

    tokio::select! {
        _ = bootstrap::shutdown_signal() => {
            manager.cleanup().await?;
        }
        _ = manager.stopped() => {}
    }

    shutdown.cancel();
    info!("Backend Stopped");
    Ok(())
}
