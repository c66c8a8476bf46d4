use nhl_players_api::{app, AppState, Config};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NHL players API...");

    let config = Config::from_env().inspect_err(|err| {
        tracing::error!("Invalid configuration: {}", err);
    })?;

    tracing::info!(
        database = %config.database.get_filename().display(),
        player_lookup = ?config.player_lookup,
        row_format = ?config.row_format,
        "Configuration loaded."
    );

    let addr = config.addr();
    let app = app(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(addr).await.inspect_err(|err| {
        tracing::error!("Failed to bind to {}: {}", addr, err);
    })?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, shutting down...");
        }
    }
}
