//! motley-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! configured backend, and serves the person registry API over HTTP.
//!
//! The flat backend loads its record file once at startup. The SQLite
//! backend seeds itself from that same record file the first time it starts
//! against an empty database.

use std::{path::Path, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use motley_api::PersonService;
use motley_core::{color::ColorCatalog, store::PersonStore};
use motley_store_flat::FlatFileStore;
use motley_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::{Backend, ServerConfig};

mod settings;

#[derive(Parser)]
#[command(author, version, about = "Motley person registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MOTLEY"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let colors = Arc::new(ColorCatalog::standard());

  // Backend selection happens exactly once, here. Handlers only ever see
  // the `PersonStore` trait.
  let app = match server_cfg.backend {
    Backend::Flat => {
      let store =
        FlatFileStore::open(&server_cfg.records_path).with_context(|| {
          format!("failed to load records from {:?}", server_cfg.records_path)
        })?;
      tracing::info!(path = ?server_cfg.records_path, "using flat-file backend");
      router_for(Arc::new(store), colors)
    }
    Backend::Sqlite => {
      let store = SqliteStore::open(&server_cfg.db_path)
        .await
        .with_context(|| {
          format!("failed to open store at {:?}", server_cfg.db_path)
        })?;
      seed_if_empty(&store, &server_cfg.records_path).await?;
      tracing::info!(path = ?server_cfg.db_path, "using SQLite backend");
      router_for(Arc::new(store), colors)
    }
  };

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Build the API router for any backend.
fn router_for<S>(store: Arc<S>, colors: Arc<ColorCatalog>) -> axum::Router
where
  S: PersonStore + 'static,
{
  motley_api::api_router(PersonService::new(store, colors))
    .layer(TraceLayer::new_for_http())
}

/// Import the flat records into a fresh SQLite database.
///
/// The database keeps its records across restarts, so only an empty store
/// is seeded. A missing record file seeds nothing.
async fn seed_if_empty(
  store: &SqliteStore,
  records_path: &Path,
) -> anyhow::Result<()> {
  if !store.list_all().await?.is_empty() {
    return Ok(());
  }

  let source = FlatFileStore::open(records_path).with_context(|| {
    format!("failed to load seed records from {records_path:?}")
  })?;
  let records = source.list_all().await?;
  let count = records.len();

  for person in records {
    store.add(person.into_candidate()).await?;
  }

  if count > 0 {
    tracing::info!("seeded {count} records into the SQLite store");
  }
  Ok(())
}
