/// Vibe Music Server - catalog, playlist and radio channel API
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::{Path, PathBuf}, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibe_core::{default_channels, DocumentStore, SeedOutcome};
use vibe_server::{config::ServerConfig, create_router, state::AppState};
use vibe_storage::SqliteDocumentStore;

#[derive(Parser)]
#[command(name = "vibe-server")]
#[command(about = "Vibe Music API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Insert the default radio channels if none exist
    Seed {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vibe_server=info,vibe_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Seed { config } => {
            seed(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Vibe Music API");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = connect(&config).await?;
    tracing::info!("Document store connected");

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app_state = AppState::new(Arc::new(store.clone()), Arc::new(config));
    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn seed(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = connect(&config).await?;

    match store.seed_channels(default_channels()).await? {
        SeedOutcome::Seeded(count) => println!("Seeded {} default channels", count),
        SeedOutcome::AlreadySeeded => println!("Channels already seeded"),
    }

    store.close().await;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path)?;
    config.validate()?;
    Ok(config)
}

async fn connect(config: &ServerConfig) -> anyhow::Result<SqliteDocumentStore> {
    if let Some(dir) = config.storage.database_dir() {
        tokio::fs::create_dir_all(&dir).await?;
    }

    let store = SqliteDocumentStore::connect(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    Ok(store)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
