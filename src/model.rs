//! Data model shared by the harvester, extractor and exporter

use crate::ScrapeError;
use serde::Serialize;
use std::fmt;

/// Sentinel for a value the listing intentionally does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Relative reference to one marketplace listing (e.g. `/sell/item/123`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingReference(String);

impl ListingReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One extracted marketplace listing
///
/// Field order is the export schema; see [`ListingRecord::COLUMNS`]. Numeric
/// looking values other than `track_count` and `is_limited_edition` are kept
/// as the text shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub artist: String,
    pub title: String,
    pub label: String,
    pub release_format: String,
    pub track_count: usize,
    pub release_date: String,
    pub price: String,
    pub rating: String,
    pub vote_count: String,
    pub have_count: String,
    pub want_count: String,
    pub is_limited_edition: u8,
    pub media_condition: String,
    pub sleeve_condition: String,
    pub detail_url: String,
}

impl ListingRecord {
    /// Column names in export order
    pub const COLUMNS: [&'static str; 15] = [
        "artist",
        "title",
        "label",
        "release_format",
        "track_count",
        "release_date",
        "price",
        "rating",
        "vote_count",
        "have_count",
        "want_count",
        "is_limited_edition",
        "media_condition",
        "sleeve_condition",
        "detail_url",
    ];
}

/// Ordered records produced by one crawl
pub type Dataset = Vec<ListingRecord>;

/// A validated request to scrape `item_count` listings of one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    category: String,
    item_count: u32,
    export: bool,
}

impl CrawlRequest {
    /// Builds a request, rejecting a zero item count
    pub fn new(category: impl Into<String>, item_count: u32, export: bool) -> Result<Self, ScrapeError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ScrapeError::InvalidRequest(
                "category cannot be empty".to_string(),
            ));
        }
        if item_count == 0 {
            return Err(ScrapeError::InvalidRequest(
                "item count must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            category,
            item_count,
            export,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn export(&self) -> bool {
        self.export
    }
}
