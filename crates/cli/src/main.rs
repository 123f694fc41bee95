use clap::Parser;
use planeboard_domain::{CliOverrides, GroupTable};
use planeboard_infrastructure::dns::DnsServerHandler;
use planeboard_infrastructure::ingestion::IngestionPipeline;
use planeboard_jobs::{JobRunner, RetentionSweepJob};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "planeboard")]
#[command(version)]
#[command(about = "Planeboard - serves recent posts as DNS TXT records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Newline-delimited JSON message source ("-" for stdin)
    #[arg(short = 'i', long, value_name = "SOURCE")]
    ingest: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
        ingest_source: cli.ingest,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Planeboard v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let (write_pool, read_pool) = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(write_pool, read_pool);
    let groups = Arc::new(GroupTable::from_config(&config.groups));
    info!(groups = groups.len(), host = %config.feed.host, "Serving zone");
    let use_cases = di::UseCases::new(&repos, groups, &config.feed.host);

    let shutdown = CancellationToken::new();

    let sweep = RetentionSweepJob::new(
        use_cases.prune_entries.clone(),
        config.retention.window_secs,
    )
    .with_interval(config.retention.sweep_interval_secs);
    let job_handles = JobRunner::new()
        .with_retention_sweep(sweep)
        .with_shutdown_token(shutdown.clone())
        .start();

    let (ingest_sender, ingest_handle) = IngestionPipeline::spawn(
        use_cases.ingest_entry.clone(),
        config.ingestion.channel_capacity,
        shutdown.clone(),
    );
    let source_handle = config.ingestion.source.clone().map(|source| {
        server::spawn_ingest_source(source, ingest_sender.clone(), shutdown.clone())
    });

    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl-C, shutting down"),
                Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
            }
            shutdown.cancel();
        });
    }

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let dns_handler = DnsServerHandler::new(use_cases.answer_question.clone());
    let result = server::start_dns_server(
        dns_addr,
        dns_handler,
        Duration::from_secs(config.server.tcp_timeout_secs),
        shutdown.clone(),
    )
    .await;

    if let Err(e) = &result {
        error!(error = %e, "DNS server error");
    }
    shutdown.cancel();
    drop(ingest_sender);

    for handle in job_handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }
    if let Some(handle) = source_handle {
        if let Err(e) = handle.await {
            warn!(error = %e, "Ingestion source ended abnormally");
        }
    }
    match ingest_handle.await {
        Ok(stored) => info!(stored, "Ingestion pipeline stopped"),
        Err(e) => warn!(error = %e, "Ingestion pipeline ended abnormally"),
    }

    info!("Server shutdown complete");
    result
}
