use std::{path::PathBuf, sync::Arc};

use cinescope_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogProvider, TmdbProvider},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinescope_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        api_key_present = config.has_api_key(),
        bearer_present = config.has_bearer(),
        "TMDB credentials loaded"
    );

    let catalog: Arc<dyn CatalogProvider> = Arc::new(TmdbProvider::from_config(&config)?);
    let state = Arc::new(AppState::new(catalog));

    let static_dir = config.static_dir.as_ref().map(PathBuf::from);
    if let Some(dir) = &static_dir {
        tracing::info!(dir = %dir.display(), "Serving static assets");
    }

    let app = create_router(state, static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
