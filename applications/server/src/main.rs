/// Portal Server - backend-for-frontend gateway
use clap::{Parser, Subcommand};
use portal_server::{
    config::GatewayConfig,
    create_router,
    services::{SessionStore, TokenVerifier, VerificationMode},
    state::AppState,
};
use portal_upstream::PortalClient;
use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portal-server")]
#[command(about = "Portal backend-for-frontend gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "PORTAL_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load and validate the configuration, then exit
    CheckConfig {
        /// Configuration file path
        #[arg(short, long, env = "PORTAL_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_server=info,portal_upstream=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::CheckConfig { config } => {
            check_config(config)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<GatewayConfig> {
    let config = GatewayConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Portal Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Upstream clients
    let upstream = PortalClient::new(config.upstream_config())?;
    tracing::info!(
        timeout_ms = config.timeouts.default_ms,
        social_timeout_ms = config.timeouts.social_ms,
        "Upstream client initialized"
    );

    // Token verification
    let verifier = TokenVerifier::from_settings(&config.auth)?;
    if verifier.mode() == VerificationMode::Unverified {
        tracing::warn!("No JWT key configured, token signatures are not verified");
    }

    // Session store
    let sessions = Arc::new(SessionStore::init(&config.session).await?);
    tracing::info!(
        persistent = config.session.persistent,
        sessions = sessions.len().await,
        "Session store initialized"
    );
    let sweeper = Arc::clone(&sessions).start_sweeper(Duration::from_secs(config.session.sweep_secs));

    let app_state = AppState::new(upstream, Arc::new(verifier), Arc::clone(&sessions));
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    let flushed = sessions.flush().await?;
    tracing::info!(sessions = flushed, "Server stopped");

    Ok(())
}

fn check_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("Configuration OK");
    println!("  listen:  {}:{}", config.server.host, config.server.port);
    for (name, base) in config.upstream.entries() {
        println!("  {:<9} {}", format!("{}:", name), base);
    }
    println!(
        "  timeouts: {} ms (social {} ms)",
        config.timeouts.default_ms, config.timeouts.social_ms
    );

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
