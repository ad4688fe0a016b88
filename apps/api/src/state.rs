use std::sync::Arc;

use crate::config::Config;
use crate::listings::feed::ListingFeed;
use crate::listings::store::ListingStore;
use crate::resume::entities::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    /// Pluggable entity recognizer. Default: GazetteerRecognizer.
    pub recognizer: Arc<dyn EntityRecognizer>,
    /// Present only when LISTINGS_FEED_URL is configured.
    pub feed: Option<Arc<dyn ListingFeed>>,
    pub config: Config,
}
