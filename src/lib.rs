//! Forum-Harvester: a sitemap-driven forum post harvester
//!
//! This crate implements a single-site crawler that walks a forum's sitemap,
//! extracts post content and metadata from each page, filters by forum
//! section, normalizes embedded TeX math, and persists each accepted post as
//! a JSON record plus an HTML preview under a sharded directory layout.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod shutdown;

use thiserror::Error;

/// Main error type for Forum-Harvester operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors surfaced by the HTTP fetcher
///
/// Transport-level failures (timeouts, DNS, connection resets) are retried up
/// to the configured cap before becoming `Transport`. HTTP responses with
/// error status codes are not errors at this layer; their bodies are returned
/// to the caller as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure for {url} after {attempts} attempts: {source}")]
    Transport {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },

    #[error("fetch interrupted by user")]
    Interrupted,
}

/// Errors surfaced by the content extractor
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document has no <title> element")]
    MissingTitle,
}

/// Errors surfaced by the sitemap parser
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type alias for Forum-Harvester operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlStats, Fetcher, PageProcessor, ProcessOutcome};
pub use extract::{extract_content, ExtractedContent};
pub use output::{shard_path, url_hash, PageRecord, DIVISIONS};
pub use shutdown::Shutdown;
