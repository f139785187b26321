//! Integration tests for the collector
//!
//! These tests use wiremock to serve category listing pages and exercise the
//! real HTTP fetcher, the collection engine, and the dataset writer end-to-end.

use emag_scraper::collector::{collect, FetchError, HttpFetcher, PageFetcher};
use emag_scraper::config::{
    Config, HttpConfig, LimitsConfig, OutputConfig, SelectorConfig, SiteConfig,
    DEFAULT_USER_AGENT,
};
use emag_scraper::output::write_dataset;
use serde_json::Value;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(
    base_url: &str,
    categories: &[&str],
    max_products: usize,
    max_per_category: usize,
    dataset_path: &str,
) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        },
        limits: LimitsConfig {
            max_products,
            max_per_category,
        },
        http: HttpConfig {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        selectors: SelectorConfig::default(),
        output: OutputConfig {
            dataset_path: dataset_path.to_string(),
            summary_path: None,
        },
    }
}

/// Renders a listing page with one product card per (name, price, rating, href)
fn listing(cards: &[(&str, &str, Option<&str>, &str)]) -> String {
    let mut html = String::from("<html><head><title>Listing</title></head><body>");
    for (name, price, rating, href) in cards {
        html.push_str(&format!(
            r#"<div class="card-standard" data-name="{}">
                <a class="js-product-url" href="{}"><img src="/img{}.jpg"></a>
                {}
                <p class="product-new-price">{}</p>
            </div>"#,
            name,
            href,
            href.replace('/', "_"),
            rating
                .map(|r| format!(r#"<span class="average-rating">{}</span>"#, r))
                .unwrap_or_default(),
            price
        ));
    }
    html.push_str("</body></html>");
    html
}

async fn mount_listing(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_collection_with_both_quotas() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/laptopuri/c",
        listing(&[
            ("Laptop Dell XPS, 15 inch", "7.499,99 Lei", Some("4.5"), "/dell/pd/1/"),
            ("Laptop Lenovo IdeaPad", "2.199 Lei", None, "/lenovo/pd/2/"),
            ("Laptop HP Pavilion", "3.050,00 Lei", Some("4.0"), "/hp/pd/3/"),
        ]),
    )
    .await;
    mount_listing(
        &mock_server,
        "/telefoane-mobile/c",
        listing(&[
            ("Telefon Samsung Galaxy", "n/a", Some("4.9"), "/samsung/pd/4/"),
            ("Telefon Apple iPhone", "5.999,00 Lei", Some("5"), "/apple/pd/5/"),
        ]),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dataset_path = dir.path().join("products.json");
    let config = create_test_config(
        &base_url,
        &["laptopuri/c", "telefoane-mobile/c"],
        3,
        2,
        dataset_path.to_str().unwrap(),
    );

    let (items, stats) = collect(&config).await.expect("Collection failed");
    assert_eq!(items.len(), 3);
    assert_eq!(stats.category_accepted("laptopuri"), 2);
    assert_eq!(stats.category_accepted("telefoane-mobile"), 1);

    let written = write_dataset(&items, &dataset_path).expect("Failed to write dataset");
    assert_eq!(written, 3);

    let content = std::fs::read_to_string(&dataset_path).unwrap();
    let records: Vec<Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0]["id"], "p1");
    assert_eq!(records[0]["name"], "Laptop Dell XPS, 15 inch");
    assert_eq!(records[0]["category"], "laptopuri");
    assert_eq!(
        records[0]["tags"],
        serde_json::json!(["laptop", "dell", "xps", "inch"])
    );
    assert_eq!(records[0]["price"], 7499.99);
    assert_eq!(records[0]["rating"], 4.5);
    assert_eq!(records[0]["productUrl"], format!("{}/dell/pd/1/", base_url));
    assert_eq!(records[0]["imageUrl"], format!("{}/img_dell_pd_1_.jpg", base_url));

    // Missing rating falls back to zero
    assert_eq!(records[1]["id"], "p2");
    assert_eq!(records[1]["rating"], 0.0);

    // Unparseable price is null
    assert_eq!(records[2]["id"], "p3");
    assert_eq!(records[2]["category"], "telefoane-mobile");
    assert_eq!(records[2]["price"], Value::Null);

    let mut keys: Vec<_> = records[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["category", "id", "imageUrl", "name", "price", "productUrl", "rating", "tags"]
    );

    // Field order in the file follows the schema
    let id_pos = content.find("\"id\"").unwrap();
    let name_pos = content.find("\"name\"").unwrap();
    let product_url_pos = content.find("\"productUrl\"").unwrap();
    assert!(id_pos < name_pos && name_pos < product_url_pos);
}

#[tokio::test]
async fn test_global_cap_leaves_later_categories_unfetched() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/mouse/c",
        listing(&[
            ("Mouse Logitech", "99 Lei", Some("4.1"), "/m/1/"),
            ("Mouse Razer", "199 Lei", Some("4.3"), "/m/2/"),
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/tastaturi/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(
        &mock_server.uri(),
        &["mouse/c", "tastaturi/c"],
        2,
        10,
        "unused.json",
    );

    let (items, stats) = collect(&config).await.expect("Collection failed");
    assert_eq!(items.len(), 2);
    assert_eq!(stats.unvisited_categories, vec!["tastaturi/c".to_string()]);

    // Wiremock verifies the expect(0) when mock_server drops
}

#[tokio::test]
async fn test_failing_category_does_not_stop_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tablete/c"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    mount_listing(
        &mock_server,
        "/smartwatch/c",
        listing(&[("Smartwatch Garmin", "1.249,99 Lei", Some("4.7"), "/w/1/")]),
    )
    .await;

    let config = create_test_config(
        &mock_server.uri(),
        &["tablete/c", "smartwatch/c"],
        10,
        10,
        "unused.json",
    );

    let (items, stats) = collect(&config).await.expect("Collection failed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "smartwatch");
    assert_eq!(stats.categories_visited, 2);
    assert_eq!(stats.failed_categories.len(), 1);
    assert_eq!(stats.failed_categories[0].category, "tablete/c");
    assert_eq!(stats.failed_categories[0].kind, "http-status");
}

#[tokio::test]
async fn test_duplicates_across_categories_are_dropped() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/espressoare/c",
        listing(&[
            ("Espressor DeLonghi", "1.899 Lei", Some("4.6"), "/e/1/"),
            ("Espressor Philips", "1.499 Lei", Some("4.4"), "/e/2/"),
        ]),
    )
    .await;
    mount_listing(
        &mock_server,
        "/roboti-bucatarie/c",
        listing(&[
            ("Espressor DeLonghi", "1.899 Lei", Some("4.6"), "/e/1/"),
            ("Robot Bosch", "999 Lei", None, "/r/1/"),
            ("Robot fara link", "499 Lei", None, ""),
        ]),
    )
    .await;

    let config = create_test_config(
        &mock_server.uri(),
        &["espressoare/c", "roboti-bucatarie/c"],
        10,
        10,
        "unused.json",
    );

    let (items, stats) = collect(&config).await.expect("Collection failed");
    let urls: Vec<_> = items.iter().map(|i| i.product_url.clone()).collect();
    let base = mock_server.uri();
    assert_eq!(
        urls,
        vec![
            format!("{}/e/1/", base),
            format!("{}/e/2/", base),
            format!("{}/r/1/", base)
        ]
    );
    assert_eq!(stats.duplicate_candidates, 1);
    assert_eq!(stats.missing_url_candidates, 1);
}

#[tokio::test]
async fn test_fetcher_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    let user_agent = "Mozilla/5.0 (X11; Linux x86_64; rv:118.0) Gecko/20100101 Firefox/118.0";

    Mock::given(method("GET"))
        .and(path("/friteuze/c"))
        .and(header("user-agent", user_agent))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        user_agent: user_agent.to_string(),
        ..HttpConfig::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();
    let url = url::Url::parse(&format!("{}/friteuze/c", mock_server.uri())).unwrap();

    let page = fetcher
        .fetch(&url, Duration::from_secs(5))
        .await
        .expect("Fetch failed");
    assert_eq!(page.status_code, 200);
}

#[tokio::test]
async fn test_fetcher_reports_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/frigidere/c"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing(&[]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let url = url::Url::parse(&format!("{}/frigidere/c", mock_server.uri())).unwrap();

    let result = fetcher.fetch(&url, Duration::from_millis(200)).await;
    match result {
        Err(e) => assert!(e.is_timeout(), "expected timeout, got {:?}", e),
        Ok(_) => panic!("expected timeout"),
    }
}

#[tokio::test]
async fn test_fetcher_reports_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/aragazuri/c"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let url = url::Url::parse(&format!("{}/aragazuri/c", mock_server.uri())).unwrap();

    let result = fetcher.fetch(&url, Duration::from_secs(5)).await;
    assert_eq!(
        result.unwrap_err(),
        FetchError::Status {
            url: url.to_string(),
            status_code: 404,
        }
    );
}

#[tokio::test]
async fn test_fetcher_reports_connection_failure() {
    // Bind and drop a listener so the port is very likely closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let url = url::Url::parse(&format!("http://127.0.0.1:{}/mouse/c", port)).unwrap();

    let result = fetcher.fetch(&url, Duration::from_secs(2)).await;
    assert!(matches!(result, Err(FetchError::Network { .. })));
}
