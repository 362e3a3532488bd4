//! Marketplace listing index: query URLs and page parsing

use crate::config::MarketplaceConfig;
use crate::crawler::planner::PageSize;
use crate::extract::{inventory_total, normalize_whitespace, ListingDocument};
use crate::model::ListingReference;
use crate::StructureError;
use url::Url;

const INDEX_PATH: &str = "/sell/list";
const ITEM_LINK: &str = "a.item_description_title";
const PAGINATION_TOTAL: &str = "strong.pagination_total";

/// Newest listings first
const SORT_ORDER: &str = "listed,desc";

/// Builds listing index URLs for one marketplace
#[derive(Debug, Clone)]
pub struct ListingIndex {
    base: Url,
    currency: String,
    format: String,
}

impl ListingIndex {
    pub fn new(origin: &Url, currency: &str, format: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: origin.join(INDEX_PATH)?,
            currency: currency.to_string(),
            format: format.to_string(),
        })
    }

    pub fn from_config(config: &MarketplaceConfig) -> Result<Self, url::ParseError> {
        let origin = Url::parse(&config.origin)?;
        Self::new(&origin, &config.currency, &config.format)
    }

    /// URL of index page `page` (1-based) for `category`
    ///
    /// Query parameters are form-encoded, so spaces in the category become `+`.
    pub fn page_url(&self, category: &str, bucket: PageSize, page: u32) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("sort", SORT_ORDER)
            .append_pair("limit", &bucket.to_string())
            .append_pair("currency", &self.currency)
            .append_pair("format", &self.format)
            .append_pair("style", category)
            .append_pair("page", &page.to_string());
        url
    }
}

/// Listing references on one index page, in document order
pub fn parse_listing_links(html: &str) -> Result<Vec<ListingReference>, StructureError> {
    let doc = ListingDocument::parse(html);
    Ok(doc
        .select_all(ITEM_LINK)?
        .into_iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| ListingReference::new(href.trim()))
        .collect())
}

/// Total number of listings reported by the pagination header
///
/// The header reads like `1 – 25 of 12,345`.
pub fn parse_inventory_total(html: &str) -> Result<u64, StructureError> {
    let doc = ListingDocument::parse(html);
    let text = normalize_whitespace(&doc.require(PAGINATION_TOTAL)?.text().collect::<String>());
    inventory_total(&text).ok_or(StructureError::PatternMismatch {
        field: "inventory_total",
        text,
    })
}
