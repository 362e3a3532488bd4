//! Discogs marketplace scraper
//!
//! This crate harvests vinyl listings from the Discogs marketplace. It walks
//! the paginated listing index for one style, follows every listing link and
//! extracts a fixed-schema record from each listing page.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("{category} is not available in the marketplace")]
    InvalidCategory { category: String },

    #[error("{requested} items is more than the {available} actually available in the marketplace")]
    OverLimit { requested: u32, available: u64 },

    #[error("Invalid crawl request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Network-level failures reported by a transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection refused for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// A listing or index page did not match the expected template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("Missing markup anchor: {anchor}")]
    MissingAnchor { anchor: String },

    #[error("Could not find {field} in '{text}'")]
    PatternMismatch { field: &'static str, text: String },
}

impl StructureError {
    pub(crate) fn missing(anchor: impl Into<String>) -> Self {
        Self::MissingAnchor {
            anchor: anchor.into(),
        }
    }
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

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{CategoryCatalog, StaticCatalog};
pub use config::Config;
pub use crawler::{Coordinator, HttpTransport, Transport};
pub use extract::FieldExtractor;
pub use model::{CrawlRequest, Dataset, ListingRecord, ListingReference};
