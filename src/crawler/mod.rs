//! Crawler module for marketplace scraping
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Transport` trait
//! - Request pacing
//! - Pagination planning and link harvesting
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod harvester;
mod index;
mod planner;
mod throttle;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, format_user_agent, HttpTransport, Transport};
pub use harvester::LinkHarvester;
pub use index::{parse_inventory_total, parse_listing_links, ListingIndex};
pub use planner::{bucket_for, page_count_for, PagePlan, PageSize};
pub use throttle::{NoDelay, RandomDelay, Throttle};

use crate::config::Config;
use crate::model::{CrawlRequest, Dataset};
use crate::output::export_dataset;
use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// Result of a complete crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    pub dataset: Dataset,

    /// Where the CSV was written, when the request asked for an export
    pub export_path: Option<PathBuf>,
}

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate the requested style and item count
/// 2. Harvest listing links from the index pages
/// 3. Fetch and extract every listing
/// 4. Export the dataset to CSV if the request asks for it
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `request` - Style, item count and export flag
pub async fn crawl(config: &Config, request: &CrawlRequest) -> Result<CrawlOutcome, ScrapeError> {
    let coordinator = Coordinator::from_config(config)?;
    crawl_with(&coordinator, request, Path::new(&config.output.directory)).await
}

/// Like [`crawl`], with an explicit coordinator and export directory
pub async fn crawl_with(
    coordinator: &Coordinator,
    request: &CrawlRequest,
    export_dir: &Path,
) -> Result<CrawlOutcome, ScrapeError> {
    let dataset = coordinator.run(request).await?;

    let export_path = if request.export() {
        let path = export_dataset(&dataset, export_dir, request.category())?;
        tracing::info!("Exported {} records to {}", dataset.len(), path.display());
        Some(path)
    } else {
        None
    };

    Ok(CrawlOutcome {
        dataset,
        export_path,
    })
}
