//! Link harvesting across listing index pages

use crate::crawler::fetcher::Transport;
use crate::crawler::index::{parse_listing_links, ListingIndex};
use crate::crawler::planner::PageSize;
use crate::crawler::throttle::Throttle;
use crate::model::ListingReference;
use crate::ScrapeError;

/// Walks index pages and collects listing references
pub struct LinkHarvester<'a> {
    transport: &'a dyn Transport,
    throttle: &'a dyn Throttle,
    index: &'a ListingIndex,
}

impl<'a> LinkHarvester<'a> {
    pub fn new(transport: &'a dyn Transport, throttle: &'a dyn Throttle, index: &'a ListingIndex) -> Self {
        Self {
            transport,
            throttle,
            index,
        }
    }

    /// Fetches pages `1..=page_count` and returns at most `limit` references
    ///
    /// References keep page order, then document order within a page. Every
    /// page is fetched even when earlier pages already hold `limit` links;
    /// the surplus is cut off at the end. A failed fetch aborts the harvest.
    pub async fn harvest_links(
        &self,
        category: &str,
        bucket: PageSize,
        page_count: u32,
        limit: usize,
    ) -> Result<Vec<ListingReference>, ScrapeError> {
        let mut links = Vec::new();

        for page in 1..=page_count {
            self.throttle.pause().await;

            let url = self.index.page_url(category, bucket, page);
            tracing::debug!("Fetching index page {}/{}: {}", page, page_count, url);

            let body = self.transport.fetch(&url).await?;
            let found = parse_listing_links(&body)?;
            tracing::debug!("Found {} listings on page {}", found.len(), page);

            links.extend(found);
        }

        links.truncate(limit);
        tracing::info!("Harvested {} listing links", links.len());
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketplaceConfig;
    use crate::crawler::testing::{index_page, CountingThrottle, FakeTransport};
    use crate::crawler::NoDelay;
    use crate::TransportError;

    fn index() -> ListingIndex {
        ListingIndex::from_config(&MarketplaceConfig::default()).unwrap()
    }

    fn page_number(url: &url::Url) -> u32 {
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap()
    }

    #[tokio::test]
    async fn test_harvest_keeps_page_order_and_truncates() {
        let transport = FakeTransport::new(|url| {
            let page = page_number(url);
            let ids: Vec<u32> = (1..=3).map(|i| page * 100 + i).collect();
            Some(index_page(&ids, 9_999))
        });
        let index = index();
        let harvester = LinkHarvester::new(&transport, &NoDelay, &index);

        let links = harvester
            .harvest_links("Techno", PageSize::TwentyFive, 3, 7)
            .await
            .unwrap();

        let paths: Vec<&str> = links.iter().map(ListingReference::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "/sell/item/101",
                "/sell/item/102",
                "/sell/item/103",
                "/sell/item/201",
                "/sell/item/202",
                "/sell/item/203",
                "/sell/item/301",
            ]
        );
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn test_harvest_never_exceeds_limit() {
        let transport = FakeTransport::new(|_| Some(index_page(&(1..=25).collect::<Vec<_>>(), 100)));
        let index = index();
        let harvester = LinkHarvester::new(&transport, &NoDelay, &index);

        for limit in [1usize, 10, 25, 60] {
            let links = harvester
                .harvest_links("Techno", PageSize::TwentyFive, 2, limit)
                .await
                .unwrap();
            assert_eq!(links.len(), limit.min(50));
        }
    }

    #[tokio::test]
    async fn test_harvest_requests_expected_pages() {
        let transport = FakeTransport::new(|_| Some(index_page(&[1], 1)));
        let index = index();
        let harvester = LinkHarvester::new(&transport, &NoDelay, &index);

        harvester
            .harvest_links("Deep House", PageSize::Fifty, 2, 50)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].contains("style=Deep+House"));
        assert!(calls[0].contains("limit=50"));
        assert!(calls[0].ends_with("page=1"));
        assert!(calls[1].ends_with("page=2"));
    }

    #[tokio::test]
    async fn test_harvest_pauses_before_every_page() {
        let transport = FakeTransport::new(|_| Some(index_page(&(1..=250).collect::<Vec<_>>(), 1_000)));
        let throttle = CountingThrottle::default();
        let index = index();
        let harvester = LinkHarvester::new(&transport, &throttle, &index);

        // Pages are fetched even after the limit is already reached
        harvester
            .harvest_links("Techno", PageSize::TwoHundredFifty, 4, 10)
            .await
            .unwrap();

        assert_eq!(throttle.pauses(), 4);
        assert_eq!(throttle.pauses(), transport.call_count());
    }

    #[tokio::test]
    async fn test_harvest_pauses_before_failing_page() {
        let transport = FakeTransport::new(|url| (page_number(url) == 1).then(|| index_page(&[1], 1)));
        let throttle = CountingThrottle::default();
        let index = index();
        let harvester = LinkHarvester::new(&transport, &throttle, &index);

        assert!(harvester
            .harvest_links("Techno", PageSize::TwentyFive, 3, 25)
            .await
            .is_err());
        assert_eq!(throttle.pauses(), 2);
    }

    #[tokio::test]
    async fn test_harvest_propagates_fetch_failure() {
        let transport = FakeTransport::new(|url| (page_number(url) == 1).then(|| index_page(&[1, 2], 2)));
        let index = index();
        let harvester = LinkHarvester::new(&transport, &NoDelay, &index);

        let err = harvester
            .harvest_links("Techno", PageSize::TwoHundredFifty, 3, 500)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::Transport(TransportError::Status { status: 404, .. })
        ));
        assert_eq!(transport.call_count(), 2);
    }
}
