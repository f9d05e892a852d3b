use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use todos_store::SqliteStore;

/// Todos - a small task-tracking web application
#[derive(Parser)]
#[command(name = "todos")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Address to listen on
  #[arg(long, default_value = "127.0.0.1:8000")]
  bind: SocketAddr,

  /// SQLite database URL (the file is created if missing)
  #[arg(long, default_value = "sqlite:todo.db")]
  database_url: String,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(serve(cli))
}

async fn serve(cli: Cli) -> Result<()> {
  let options = SqliteConnectOptions::from_str(&cli.database_url)
    .with_context(|| format!("invalid database url: {}", cli.database_url))?
    .create_if_missing(true);

  let pool = SqlitePoolOptions::new()
    .connect_with(options)
    .await
    .context("failed to open database")?;

  // Schema is applied at startup; create-if-absent semantics.
  let store = Arc::new(SqliteStore::new(pool));
  store.migrate().await.context("failed to run migrations")?;

  let app = todos_web::router(store);

  let listener = tokio::net::TcpListener::bind(cli.bind)
    .await
    .with_context(|| format!("failed to bind {}", cli.bind))?;

  info!(addr = %cli.bind, "listening");

  axum::serve(listener, app)
    .await
    .context("server failed")?;

  Ok(())
}
