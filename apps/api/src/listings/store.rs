//! JSON-file backed listing store.
//!
//! Listings live in a single pretty-printed JSON array on disk and are
//! mirrored in memory behind an RwLock. Reads are served from the cache;
//! a feed refresh rewrites the file and swaps the cache in one call.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::sync::RwLock;

use crate::listings::model::Listing;

pub struct ListingStore {
    path: PathBuf,
    cache: RwLock<Vec<Listing>>,
}

impl ListingStore {
    /// Opens the store at `path`, loading the existing file if present.
    /// A missing file is not an error: the store starts empty and the
    /// first refresh creates it.
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let listings = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let listings: Vec<Listing> = serde_json::from_slice(&bytes)
                    .with_context(|| format!("invalid listings file {}", path.display()))?;
                tracing::info!(count = listings.len(), path = %path.display(), "loaded listings");
                listings
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no listings file, starting empty");
                Vec::new()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read listings file {}", path.display()))
            }
        };
        Ok(Self {
            path,
            cache: RwLock::new(listings),
        })
    }

    /// Returns a snapshot of all listings.
    pub async fn all(&self) -> Vec<Listing> {
        self.cache.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Replaces the full dataset, persisting to disk before swapping the
    /// cache so a write failure leaves the old data visible.
    pub async fn replace_all(&self, listings: Vec<Listing>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_vec_pretty(&listings).context("failed to encode listings")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write listings file {}", self.path.display()))?;
        let mut cache = self.cache.write().await;
        *cache = listings;
        Ok(())
    }
}
