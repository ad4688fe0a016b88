mod config;
mod errors;
mod listings;
mod matching;
mod resume;
mod routes;
mod state;
mod vocab;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::listings::feed::{refresh_loop, HttpListingFeed, ListingFeed};
use crate::listings::store::ListingStore;
use crate::resume::entities::GazetteerRecognizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(ListingStore::open(&config.listings_path).await?);

    // Start the background refresh loop when a feed is configured.
    let feed: Option<Arc<dyn ListingFeed>> = config
        .listings_feed_url
        .clone()
        .map(|url| Arc::new(HttpListingFeed::new(url)) as Arc<dyn ListingFeed>);
    if let Some(feed) = feed.clone() {
        info!(
            interval_secs = config.refresh_interval_secs,
            "listing feed configured, starting refresh loop"
        );
        tokio::spawn(refresh_loop(
            feed,
            store.clone(),
            config.refresh_interval_secs,
        ));
    }

    let state = AppState {
        store,
        recognizer: Arc::new(GazetteerRecognizer),
        feed,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
