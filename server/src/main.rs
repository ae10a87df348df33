use std::sync::Arc;

use booking_server::{build_router, catalog::ApiCatalog, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        site_url = %config.site_url,
        api_base_url = %config.api_base_url,
        static_dir = %config.static_dir.display(),
        "Loaded configuration from environment/.env"
    );
    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "index.html not found; build the frontend bundle first"
        );
    }

    let catalog = ApiCatalog::new(config.api_base_url.clone(), config.upstream_timeout)?;
    let bind_addr = config.bind_addr;
    let app = build_router(AppState::new(config, Arc::new(catalog)));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
