use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the JSON resources are fetched from
    pub content_base_url: String,

    /// Language applied at page load
    pub default_language: String,

    /// How many videos the homepage gallery shows
    pub home_video_limit: usize,

    /// Per-request timeout for resource fetches, in seconds
    pub request_timeout_secs: u64,

    /// Testimonial carousel auto-advance interval, in milliseconds
    pub carousel_autoplay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_base_url: std::env::var("CONTENT_BASE_URL")
                .context("CONTENT_BASE_URL not set")?,

            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            home_video_limit: std::env::var("HOME_VIDEO_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            carousel_autoplay_ms: std::env::var("CAROUSEL_AUTOPLAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        })
    }
}
