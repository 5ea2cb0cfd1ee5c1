//! sketchspark daemon entry point
//!
//! Startup order matters: configuration, store, seeding, then the HTTP
//! listener. Seeding completes (or fails) before the first request is
//! accepted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use sketchspark::config::Config;
use sketchspark::db::ChallengeDb;
use sketchspark::providers::ColorClient;
use sketchspark::seed::{self, SeedLoader};
use sketchspark::server::{create_router, AppState};

#[derive(Parser)]
#[command(name = "sketchspark")]
#[command(about = "Inspiration generator for drawing practice")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sketchspark.toml")]
    config: String,

    /// Path to the SQLite database (overrides config file)
    #[arg(long, env = "SKETCHSPARK_DB")]
    db: Option<String>,

    /// Path to the seed data file (overrides config file)
    #[arg(long, env = "SKETCHSPARK_SEED")]
    seed_file: Option<String>,

    /// HTTP port (overrides config file)
    #[arg(short, long, env = "SKETCHSPARK_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sketchspark=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting sketchspark");
    info!("Config file: {}", cli.config);

    // Load or create default config
    let mut config: Config = if std::path::Path::new(&cli.config).exists() {
        let content = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&content)?
    } else {
        info!("Config file not found, using defaults");
        Config::default()
    };

    // Apply CLI overrides
    if let Some(db_path) = cli.db {
        config.store.path = Some(PathBuf::from(db_path));
    }
    if let Some(seed_file) = cli.seed_file {
        config.seed.file = Some(PathBuf::from(seed_file));
    }
    if let Some(port) = cli.port {
        config.server.http_port = port;
    }

    // Open the store; the path is a required setting
    let store_path = config.store_path()?.clone();
    info!("Store: {}", store_path.display());
    let db = Arc::new(ChallengeDb::open(&store_path)?);

    // Seed before accepting requests. A missing source is tolerated (the
    // service runs with an empty store); a persistence failure is fatal.
    let loader = SeedLoader::new(config.seed.file.clone());
    seed::seed_at_startup(&loader, &db)?;

    // Router and state
    let color = ColorClient::new(config.color.base_url.clone(), config.color.timeout_secs);
    let app = create_router(AppState::new(db, color));

    // Bind to HTTP port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.http_port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
