//! Integration tests for the catalog over HTTP
//!
//! These tests use wiremock to stand in for the remote feed and run the
//! whole fetch, decode and query cycle.

use std::sync::Arc;
use std::time::Duration;

use catalogo::app::{AppContext, CatalogError};
use catalogo::catalog::Catalog;
use catalogo::config::Config;
use catalogo::fetcher::{HttpFetcher, RetryPolicy};
use catalogo::normalizer::DecodeError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Catálogo</title>
  <entry>
    <title>Televisor Samsung 55" UHD</title>
    <summary>Smart TV con 3 HDMI</summary>
    <link rel="alternate" href="https://tienda.example/tv-55"/>
  </entry>
  <entry>
    <title>Microonda con función de cocina</title>
    <summary>20 litros</summary>
    <link href="https://tienda.example/microonda"/>
  </entry>
  <entry>
    <title>Cocina a gas Indurama</title>
    <summary>4 quemadores</summary>
    <link>https://tienda.example/cocina</link>
  </entry>
  <entry>
    <title>Laptop Lenovo Ryzen 7</title>
    <link href="https://tienda.example/laptop"/>
  </entry>
</feed>"#;

/// A catalog pointed at the mock server with short timeouts and backoff.
fn test_catalog(server: &MockServer, request_timeout: Duration) -> Catalog {
    let fetcher = HttpFetcher::with_timeouts(
        Duration::from_secs(2),
        Duration::from_secs(5),
        Some(request_timeout),
        "catalogo-test",
    )
    .expect("Failed to build fetcher");

    let policy = RetryPolicy {
        max_attempts: 3,
        backoff_step: Duration::from_millis(10),
    };

    Catalog::new(
        Arc::new(fetcher),
        format!("{}/XMLData/atomfeed.xml", server.uri()),
        policy,
    )
}

async fn serve_feed(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/XMLData/atomfeed.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/atom+xml"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_all_over_http() {
    let mock_server = MockServer::start().await;
    serve_feed(&mock_server, FEED).await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    let products = catalog.fetch_all().await.expect("Fetch failed");

    assert_eq!(products.len(), 4);

    let labels: Vec<&str> = products.iter().map(|p| p.category().label()).collect();
    assert_eq!(
        labels,
        vec!["Televisores", "Horno Microondas", "Cocina a gas", "Laptops"]
    );
    assert_eq!(products[0].link(), "https://tienda.example/tv-55");
    assert_eq!(products[2].link(), "https://tienda.example/cocina");
    assert_eq!(products[3].summary(), "");
}

#[tokio::test]
async fn test_queries_over_http() {
    let mock_server = MockServer::start().await;
    serve_feed(&mock_server, FEED).await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));

    let found = catalog.search("quemadores").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Cocina a gas Indurama");

    assert!(catalog.search("refrigeradora").await.unwrap().is_empty());

    assert_eq!(
        catalog.by_index(3).await.unwrap().title(),
        "Laptop Lenovo Ryzen 7"
    );
    assert!(matches!(
        catalog.by_index(4).await,
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        catalog.by_index(-1).await,
        Err(CatalogError::NotFound(_))
    ));

    assert_eq!(
        catalog.list_categories().await.unwrap(),
        vec!["Cocina a gas", "Horno Microondas", "Laptops", "Televisores"]
    );

    let laptops = catalog.by_category("LAPTOPS").await.unwrap();
    assert_eq!(laptops.len(), 1);
    assert!(matches!(
        catalog.by_category("nonexistent").await,
        Err(CatalogError::NotFound(_))
    ));

    // One request per query, nothing cached.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 8);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    let err = catalog.fetch_all().await.unwrap_err();

    assert!(matches!(err, CatalogError::Transport(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_not_found_status_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    assert!(matches!(
        catalog.fetch_all().await,
        Err(CatalogError::Transport(_))
    ));
}

#[tokio::test]
async fn test_multiple_choices_with_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(300).set_body_string(FEED))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    assert!(matches!(
        catalog.fetch_all().await,
        Err(CatalogError::Transport(_))
    ));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/XMLData/atomfeed.xml"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/moved"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(0)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    let err = catalog.fetch_all().await.unwrap_err();

    assert!(matches!(err, CatalogError::Transport(ref msg) if msg.contains("301")));
}

#[tokio::test]
async fn test_not_modified_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    assert!(matches!(
        catalog.fetch_all().await,
        Err(CatalogError::Transport(_))
    ));
}

#[tokio::test]
async fn test_slow_feed_is_retried_then_given_up() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FEED)
                .set_delay(Duration::from_secs(3)),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let catalog = test_catalog(&mock_server, Duration::from_millis(200));
    let err = catalog.fetch_all().await.unwrap_err();

    assert!(matches!(err, CatalogError::TimeoutExceeded { attempts: 3 }));
}

#[tokio::test]
async fn test_malformed_feed_is_decode_error() {
    let mock_server = MockServer::start().await;
    serve_feed(&mock_server, "<html><body>Mantenimiento</body>").await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    let err = catalog.list_all().await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode(DecodeError::Malformed(_))));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_wrong_document_is_decode_error() {
    let mock_server = MockServer::start().await;
    serve_feed(
        &mock_server,
        "<rss version=\"2.0\"><channel><title>x</title></channel></rss>",
    )
    .await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    assert!(matches!(
        catalog.list_all().await,
        Err(CatalogError::Decode(DecodeError::MissingRoot { .. }))
    ));
}

#[tokio::test]
async fn test_empty_feed_is_empty_list() {
    let mock_server = MockServer::start().await;
    serve_feed(&mock_server, "<feed><title>Vacío</title></feed>").await;

    let catalog = test_catalog(&mock_server, Duration::from_secs(5));
    assert!(catalog.list_all().await.unwrap().is_empty());
    assert!(catalog.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_context_from_config() {
    let mock_server = MockServer::start().await;
    serve_feed(&mock_server, FEED).await;

    let mut config = Config::default();
    config.feed.url = format!("{}/XMLData/atomfeed.xml", mock_server.uri());

    let ctx = AppContext::new(config).expect("Failed to build context");
    let products = ctx.catalog.list_all().await.expect("Fetch failed");
    assert_eq!(products.len(), 4);
}
