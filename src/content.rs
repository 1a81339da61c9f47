//! Content loading: the two JSON resources backing the dynamic sections.
//!
//! `ContentLoader` fetches and parses a resource from scratch on every call.
//! `ContentStore` layers the load-once cache on top: the first successful
//! fetch is kept for the page's lifetime and language switches project from
//! it instead of re-fetching; only an explicit `invalidate` forces a reload.

use crate::i18n::Language;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// The two JSON documents the site is fed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Videos,
    Reviews,
}

impl Resource {
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Videos => "videos.json",
            Resource::Reviews => "reviews.json",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A portfolio video. Order in the source file is significant and preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    pub url: String,
    pub title: String,
}

/// A client testimonial with per-language review text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub name: String,
    pub title: String,
    pub image: String,
    pub review: HashMap<String, String>,
}

impl Review {
    /// Review text for a language, absent when the entry was never authored.
    pub fn text_for(&self, lang: Language) -> Option<&str> {
        self.review.get(lang.code()).map(String::as_str)
    }
}

/// Why a resource could not be loaded. An empty collection is NOT a failure;
/// callers get `Ok(vec![])` and render the empty state instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {resource} failed: {source}")]
    Network {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} request returned HTTP {status}")]
    Http {
        resource: Resource,
        status: reqwest::StatusCode,
    },

    #[error("{resource} is not well-formed JSON: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetches and parses the site's JSON resources. No caching, no retries:
/// every call goes to the network.
pub struct ContentLoader {
    client: reqwest::Client,
    base_url: String,
}

impl ContentLoader {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn load_videos(&self) -> Result<Vec<Video>, LoadError> {
        self.fetch_json(Resource::Videos).await
    }

    pub async fn load_reviews(&self) -> Result<Vec<Review>, LoadError> {
        self.fetch_json(Resource::Reviews).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, LoadError> {
        let url = format!("{}/{}", self.base_url, resource.file_name());
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Network { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http { resource, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Network { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| LoadError::Parse { resource, source })
    }
}

/// Load-once cache over [`ContentLoader`], keyed by resource.
///
/// Concurrent first calls may fetch twice; the last writer wins, which is
/// harmless because both carry the same document.
pub struct ContentStore {
    loader: ContentLoader,
    videos: RwLock<Option<Arc<Vec<Video>>>>,
    reviews: RwLock<Option<Arc<Vec<Review>>>>,
}

impl ContentStore {
    pub fn new(loader: ContentLoader) -> Self {
        Self {
            loader,
            videos: RwLock::new(None),
            reviews: RwLock::new(None),
        }
    }

    /// The cached video collection, fetching it on first use.
    pub async fn videos(&self) -> Result<Arc<Vec<Video>>, LoadError> {
        if let Some(cached) = self.videos.read().unwrap().clone() {
            return Ok(cached);
        }

        let fetched = Arc::new(self.loader.load_videos().await?);
        info!("Loaded {} videos", fetched.len());
        *self.videos.write().unwrap() = Some(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// The cached review collection, fetching it on first use.
    pub async fn reviews(&self) -> Result<Arc<Vec<Review>>, LoadError> {
        if let Some(cached) = self.reviews.read().unwrap().clone() {
            return Ok(cached);
        }

        let fetched = Arc::new(self.loader.load_reviews().await?);
        info!("Loaded {} reviews", fetched.len());
        *self.reviews.write().unwrap() = Some(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// Drop the cached copy of a resource; the next read re-fetches.
    pub fn invalidate(&self, resource: Resource) {
        match resource {
            Resource::Videos => *self.videos.write().unwrap() = None,
            Resource::Reviews => *self.reviews.write().unwrap() = None,
        }
        debug!("Invalidated cache for {}", resource);
    }
}
