use anyhow::Context;
use concurrent_map_misuse::{config::Config, routes::app_router, AppState};
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::init().context("Failed to load configuration")?;
    let port = config.port;

    tracing::info!(
        threads = config.filler.threads,
        target = config.filler.target,
        initial = config.filler.initial,
        "Filler configured with timeout {:?}",
        config.filler.timeout
    );

    let app = app_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("Server started on port {}", port);
    tracing::info!("Try: http://localhost:{}/concurrenthashmapmisuse/wrong", port);

    axum::serve(listener, app).await?;

    Ok(())
}
