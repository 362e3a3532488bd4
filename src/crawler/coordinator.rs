//! Crawler coordinator - main crawl orchestration logic
//!
//! Runs one crawl request end to end:
//! - Validates the category against the catalog (no network)
//! - Validates the item count against the live inventory (one fetch)
//! - Plans pagination and harvests listing links
//! - Fetches and extracts every listing, pausing before each request

use crate::catalog::{CategoryCatalog, StaticCatalog};
use crate::config::Config;
use crate::crawler::fetcher::{HttpTransport, Transport};
use crate::crawler::harvester::LinkHarvester;
use crate::crawler::index::{parse_inventory_total, ListingIndex};
use crate::crawler::planner::{bucket_for, PagePlan};
use crate::crawler::throttle::{RandomDelay, Throttle};
use crate::extract::FieldExtractor;
use crate::model::{CrawlRequest, Dataset};
use crate::ScrapeError;
use std::sync::Arc;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    transport: Arc<dyn Transport>,
    throttle: Arc<dyn Throttle>,
    catalog: Arc<dyn CategoryCatalog>,
    origin: Url,
    index: ListingIndex,
    extractor: FieldExtractor,
}

impl Coordinator {
    /// Creates a coordinator from explicit collaborators
    ///
    /// # Arguments
    ///
    /// * `config` - Marketplace settings (origin, currency, format)
    /// * `transport` - Fetches index and listing pages
    /// * `throttle` - Pause applied before every request
    /// * `catalog` - Categories a request may target
    pub fn new(
        config: &Config,
        transport: Arc<dyn Transport>,
        throttle: Arc<dyn Throttle>,
        catalog: Arc<dyn CategoryCatalog>,
    ) -> Result<Self, ScrapeError> {
        let origin = Url::parse(&config.marketplace.origin)?;
        let index = ListingIndex::new(
            &origin,
            &config.marketplace.currency,
            &config.marketplace.format,
        )?;

        Ok(Self {
            transport,
            throttle,
            catalog,
            extractor: FieldExtractor::new(origin.clone()),
            origin,
            index,
        })
    }

    /// Creates a coordinator with the HTTP transport, randomized delay and
    /// built-in style catalog
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let transport = HttpTransport::from_config(&config.user_agent, &config.crawler)?;
        Self::new(
            config,
            Arc::new(transport),
            Arc::new(RandomDelay::from_config(&config.crawler)),
            Arc::new(StaticCatalog::marketplace_styles()),
        )
    }

    /// Resolves `category` to the catalog's spelling
    pub fn validate_category(&self, category: &str) -> Result<String, ScrapeError> {
        self.catalog
            .resolve(category)
            .map(str::to_owned)
            .ok_or_else(|| ScrapeError::InvalidCategory {
                category: category.to_string(),
            })
    }

    /// Reads the live listing count for `category` from the first index page
    pub async fn available_items(&self, category: &str, requested: u32) -> Result<u64, ScrapeError> {
        self.throttle.pause().await;

        let url = self.index.page_url(category, bucket_for(requested), 1);
        tracing::debug!("Checking inventory: {}", url);

        let body = self.transport.fetch(&url).await?;
        Ok(parse_inventory_total(&body)?)
    }

    /// Fails with `OverLimit` when more items are requested than listed
    pub async fn validate_count(&self, category: &str, requested: u32) -> Result<u64, ScrapeError> {
        let available = self.available_items(category, requested).await?;
        if u64::from(requested) > available {
            return Err(ScrapeError::OverLimit {
                requested,
                available,
            });
        }
        Ok(available)
    }

    /// Runs a crawl and returns the extracted records in harvest order
    ///
    /// Any fetch or extraction failure aborts the crawl; there is no partial
    /// result.
    pub async fn run(&self, request: &CrawlRequest) -> Result<Dataset, ScrapeError> {
        let category = self.validate_category(request.category())?;
        let requested = request.item_count();

        let available = self.validate_count(&category, requested).await?;
        tracing::info!(
            "Style '{}' has {} listings available, scraping {}",
            category,
            available,
            requested
        );

        let plan = PagePlan::for_count(requested);
        tracing::debug!(
            "Page size {}, {} index page(s) to read",
            plan.bucket,
            plan.page_count
        );

        let harvester = LinkHarvester::new(self.transport.as_ref(), self.throttle.as_ref(), &self.index);
        let links = harvester
            .harvest_links(&category, plan.bucket, plan.page_count, requested as usize)
            .await?;

        if links.len() < requested as usize {
            tracing::warn!(
                "Only {} of {} requested listings were found on the index pages",
                links.len(),
                requested
            );
        }

        let total = links.len();
        let mut dataset = Dataset::with_capacity(total);

        for (position, link) in links.iter().enumerate() {
            self.throttle.pause().await;

            let url = self.origin.join(link.as_str())?;
            tracing::info!("Processing item {}/{}: {}", position + 1, total, url);

            let body = self.transport.fetch(&url).await?;
            let record = self.extractor.extract_html(&body).map_err(|e| {
                tracing::error!("Failed to extract {}: {}", url, e);
                e
            })?;

            dataset.push(record);
        }

        tracing::info!("Scraped {} listings for '{}'", dataset.len(), category);
        Ok(dataset)
    }
}

/// Runs a crawl with the default collaborators
///
/// # Example
///
/// ```no_run
/// use discogs_scraper::config::Config;
/// use discogs_scraper::crawler::run_crawl;
/// use discogs_scraper::model::CrawlRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = CrawlRequest::new("Techno", 25, false)?;
/// let dataset = run_crawl(&Config::default(), &request).await?;
/// println!("{} records", dataset.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config, request: &CrawlRequest) -> Result<Dataset, ScrapeError> {
    let coordinator = Coordinator::from_config(config)?;
    coordinator.run(request).await
}
