//! Integration tests for the scraper
//!
//! These tests use wiremock to stand in for the marketplace and run the full
//! pipeline over real HTTP: inventory check, index pages, listing pages and
//! CSV export.

use discogs_scraper::catalog::StaticCatalog;
use discogs_scraper::config::{Config, CrawlerConfig, UserAgentConfig};
use discogs_scraper::crawler::{crawl_with, Coordinator, HttpTransport, NoDelay};
use discogs_scraper::model::CrawlRequest;
use discogs_scraper::{ScrapeError, TransportError};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_RATED: &str = include_str!("../fixtures/listing_rated.html");
const LISTING_UNRATED: &str = include_str!("../fixtures/listing_unrated.html");

/// Index page linking to `/sell/item/<id>` for each id
fn index_page(ids: &[u32], total: &str) -> String {
    let rows: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<tr class="shortcut_navigable"><td class="item_description">
                    <a class="item_description_title" href="/sell/item/{id}">Listing {id}</a>
                </td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>
            <div class="pagination_total_wrap">
                <strong class="pagination_total">1 &ndash; {} of {}</strong>
            </div>
            <table class="table_block mpitems"><tbody>{}</tbody></table>
        </body></html>"#,
        ids.len(),
        total,
        rows
    )
}

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html; charset=utf-8")
}

fn coordinator(server: &MockServer, styles: &[&str]) -> Coordinator {
    let mut config = Config::default();
    config.marketplace.origin = server.uri();

    let transport = HttpTransport::from_config(&UserAgentConfig::default(), &CrawlerConfig::default())
        .expect("Failed to build HTTP client");

    Coordinator::new(
        &config,
        Arc::new(transport),
        Arc::new(NoDelay),
        Arc::new(StaticCatalog::new(styles.iter().copied())),
    )
    .expect("Failed to create coordinator")
}

async fn mount_item(server: &MockServer, id: u32, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/sell/item/{}", id)))
        .respond_with(html(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_page() {
    let server = MockServer::start().await;

    // Inventory check and index page share the same URL
    Mock::given(method("GET"))
        .and(path("/sell/list"))
        .and(query_param("sort", "listed,desc"))
        .and(query_param("limit", "25"))
        .and(query_param("currency", "EUR"))
        .and(query_param("format", "Vinyl"))
        .and(query_param("style", "Deep House"))
        .and(query_param("page", "1"))
        .respond_with(html(index_page(&[11, 12, 13, 14], "1,337")))
        .expect(2)
        .mount(&server)
        .await;

    mount_item(&server, 11, LISTING_RATED).await;
    mount_item(&server, 12, LISTING_UNRATED).await;
    mount_item(&server, 13, LISTING_RATED).await;

    let coordinator = coordinator(&server, &["Deep House"]);
    let request = CrawlRequest::new("deep house", 3, false).unwrap();

    let dataset = coordinator.run(&request).await.expect("Crawl failed");

    assert_eq!(dataset.len(), 3);

    let first = &dataset[0];
    assert_eq!(first.artist, "Pascal Hetzel");
    assert_eq!(first.title, "Extra Terra / Fermi Paradox");
    assert_eq!(first.release_format, "12\"");
    assert_eq!(first.vote_count, "9");
    assert_eq!(
        first.detail_url,
        format!(
            "{}/Pascal-Hetzel-Extra-Terra-Fermi-Paradox/release/9830762?ev=item-vc",
            server.uri()
        )
    );

    let second = &dataset[1];
    assert_eq!(second.rating, "N/A");
    assert_eq!(second.have_count, "3");
    assert_eq!(second.want_count, "17");
    assert_eq!(second.is_limited_edition, 1);
    assert_eq!(second.sleeve_condition, "N/A");
}

#[tokio::test]
async fn test_full_crawl_across_pages_with_export() {
    let server = MockServer::start().await;

    let page_one: Vec<u32> = (1..=250).collect();
    let page_two: Vec<u32> = (251..=500).collect();

    Mock::given(method("GET"))
        .and(path("/sell/list"))
        .and(query_param("limit", "250"))
        .and(query_param("page", "1"))
        .respond_with(html(index_page(&page_one, "28,541")))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sell/list"))
        .and(query_param("limit", "250"))
        .and(query_param("page", "2"))
        .respond_with(html(index_page(&page_two, "28,541")))
        .expect(1)
        .mount(&server)
        .await;

    // 252 items: all of page one and the first two of page two
    Mock::given(method("GET"))
        .and(wiremock::matchers::path_regex(r"^/sell/item/\d+$"))
        .respond_with(html(LISTING_RATED))
        .expect(252)
        .mount(&server)
        .await;

    let coordinator = coordinator(&server, &["Techno"]);
    let request = CrawlRequest::new("Techno", 252, true).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let outcome = crawl_with(&coordinator, &request, dir.path())
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.dataset.len(), 252);

    let requests = server.received_requests().await.unwrap();
    let items: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path().starts_with("/sell/item/"))
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(items.first().map(String::as_str), Some("/sell/item/1"));
    assert_eq!(items.last().map(String::as_str), Some("/sell/item/252"));

    let export = outcome.export_path.expect("Export path missing");
    let content = std::fs::read_to_string(export).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "artist,title,label,release_format,track_count,release_date,price,rating,vote_count,\
         have_count,want_count,is_limited_edition,media_condition,sleeve_condition,detail_url"
    );
    assert_eq!(lines.count(), 252);
}

#[tokio::test]
async fn test_over_limit_stops_after_inventory_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/list"))
        .respond_with(html(index_page(&[1, 2, 3], "3")))
        .expect(1)
        .mount(&server)
        .await;

    let coordinator = coordinator(&server, &["Experimental"]);
    let request = CrawlRequest::new("Experimental", 10, false).unwrap();

    let err = coordinator.run(&request).await.unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::OverLimit {
            requested: 10,
            available: 3
        }
    ));
    assert!(err.to_string().contains("10"));
    assert!(err.to_string().contains("3"));
}

#[tokio::test]
async fn test_invalid_style_sends_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html(index_page(&[1], "1")))
        .expect(0)
        .mount(&server)
        .await;

    let coordinator = coordinator(&server, &["Experimental"]);
    let request = CrawlRequest::new("InvalidStyle", 10, false).unwrap();

    let err = coordinator.run(&request).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "InvalidStyle is not available in the marketplace"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_server_error_aborts_crawl() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/list"))
        .respond_with(html(index_page(&[1, 2], "2")))
        .mount(&server)
        .await;

    mount_item(&server, 1, LISTING_RATED).await;

    Mock::given(method("GET"))
        .and(path("/sell/item/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let coordinator = coordinator(&server, &["Experimental"]);
    let request = CrawlRequest::new("Experimental", 2, false).unwrap();

    let err = coordinator.run(&request).await.unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::Transport(TransportError::Status { status: 500, .. })
    ));
}
