//! Upstream listing feed and the periodic refresh loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::listings::model::Listing;
use crate::listings::store::ListingStore;

/// A source of job listings. The HTTP feed is the production
/// implementation; tests substitute a canned one.
#[async_trait]
pub trait ListingFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Listing>, AppError>;
}

/// Fetches listings from a JSON endpoint returning an array of listings.
pub struct HttpListingFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpListingFeed {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ListingFeed for HttpListingFeed {
    async fn fetch(&self) -> Result<Vec<Listing>, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Feed(format!("feed request failed: {}", e)))?;
        let response = response
            .error_for_status()
            .map_err(|e| AppError::Feed(format!("feed returned error status: {}", e)))?;
        response
            .json::<Vec<Listing>>()
            .await
            .map_err(|e| AppError::Feed(format!("feed returned invalid JSON: {}", e)))
    }
}

/// Fetches once and replaces the stored dataset. An empty fetch is treated
/// as a feed fault rather than a legitimate dataset, so a flaky upstream
/// cannot wipe the store.
pub async fn refresh_once(
    feed: &dyn ListingFeed,
    store: &ListingStore,
) -> Result<usize, AppError> {
    let listings = feed.fetch().await?;
    if listings.is_empty() {
        return Err(AppError::Feed("feed returned no listings".into()));
    }
    let count = listings.len();
    store.replace_all(listings).await?;
    tracing::info!(count, "refreshed listings from feed");
    Ok(count)
}

/// Background refresh task. Failures are logged and the previous dataset
/// stays in place until the next tick.
pub async fn refresh_loop(
    feed: Arc<dyn ListingFeed>,
    store: Arc<ListingStore>,
    interval_secs: u64,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        if let Err(err) = refresh_once(feed.as_ref(), store.as_ref()).await {
            tracing::warn!(error = %err, "listing refresh failed, keeping previous dataset");
        }
    }
}
