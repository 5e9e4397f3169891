mod commands;

use bucket_browser::server::{CatalogServer, ServerConfig};
use clap::Parser;
use commands::{run_buckets, run_check, run_files, Args, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let args = Args::parse();

  // Load config: explicit path > auto-detect > defaults
  let mut config = if let Some(path) = &args.config {
    ServerConfig::from_file(path)?
  } else {
    ServerConfig::find_and_load()?.unwrap_or_default()
  };

  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  match args.command {
    Commands::Serve { host, port, dist } => {
      if let Some(host) = host {
        config.server.host = host;
      }
      if let Some(port) = port {
        config.server.port = port;
      }
      if let Some(dist) = dist {
        config.server.dist_dir = dist;
      }
      config.validate()?;
      CatalogServer::new(config).run(shutdown_signal()).await
    }
    Commands::Buckets { search, format } => run_buckets(&config.catalog, &search, format),
    Commands::Files {
      bucket,
      search,
      tags,
      format,
    } => run_files(&config.catalog, &bucket, &search, &tags, format),
    Commands::Check => run_check(&config.catalog),
  }
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("Failed to listen for Ctrl+C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("Received SIGINT"),
    _ = terminate => tracing::info!("Received SIGTERM"),
  }
}
