//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use ripple_crawl::config::{parse_config, Config};
use ripple_crawl::crawler::{crawl, Coordinator, CrawlPhase};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling the mock server
fn create_test_config(base_url: &str, results_path: &Path) -> Config {
    let mut config = Config::default();
    config.crawler.seed_url = format!("{}/", base_url);
    config.crawler.stats_interval_ms = 50;
    config.fetch.max_attempts = 2;
    config.fetch.backoff_step_ms = 0;
    config.fetch.timeout_secs = 5;
    config.robots.timeout_secs = 2;
    config.user_agent.crawler_name = "TestBot".to_string();
    config.output.results_path = results_path.display().to_string();
    config
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn count_records(content: &str) -> usize {
    content.split_terminator("}\n").count()
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;
    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="{}/page1">Page 1</a>
            <a href="/page2">Page 2</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_html(
        &mock_server,
        "/page1",
        r#"<html><head><title>Page 1</title></head><body><a href="/page2">2</a></body></html>"#
            .to_string(),
    )
    .await;
    mount_html(
        &mock_server,
        "/page2",
        r#"<html><head><title>Page 2</title></head><body>Content 2</body></html>"#.to_string(),
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let results_path = dir.path().join("result.txt");
    let config = create_test_config(&base_url, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.visited_size, 3);
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(report.frontier_size, 0);
    assert!(report.total_enqueued >= 2);

    let content = std::fs::read_to_string(&results_path).expect("Failed to read results");
    assert_eq!(count_records(&content), 3);
    assert!(content.contains(&format!("{{\n\ttitle: Home,\n\turl: {}/\n}}\n", base_url)));
    assert!(content.contains(&format!("\ttitle: Page 1,\n\turl: {}/page1\n", base_url)));
    assert!(content.contains(&format!("\ttitle: Page 2,\n\turl: {}/page2\n", base_url)));
}

#[tokio::test]
async fn test_robots_txt_respect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /admin").await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/allowed">Allowed Page</a>
        <a href="/admin">Admin Page</a>
        <a href="/admin/users">Admin Users</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_html(
        &mock_server,
        "/allowed",
        r#"<html><head><title>Allowed</title></head><body>Allowed content</body></html>"#
            .to_string(),
    )
    .await;

    // Admin pages should never be requested
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&base_url, &dir.path().join("result.txt"));

    let report = crawl(config).await.expect("Crawl failed");

    // Wiremock verifies the admin expectations when mock_server drops
    assert_eq!(report.visited_size, 2);
    assert_eq!(report.total_enqueued, 1);
}

#[tokio::test]
async fn test_one_cycle_enqueues_only_same_domain_link() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "").await;
    mount_html(
        &mock_server,
        "/",
        r##"<html><head><title>Seed</title></head><body>
        <a href="/a">A</a>
        <a href="#top">Top</a>
        <a href="mailto:x@y.com">Mail</a>
        <a href="http://other.test/z">Elsewhere</a>
        </body></html>"##
            .to_string(),
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&base_url, &dir.path().join("result.txt"));
    // The seed alone fills the ceiling, so the crawl stops after one cycle
    config.crawler.max_pages = 1;

    let mut coordinator = Coordinator::new(config)
        .await
        .expect("Failed to create coordinator");
    let report = coordinator.run().await;

    assert_eq!(coordinator.phase(), CrawlPhase::Drained);
    assert_eq!(
        coordinator.context().frontier.snapshot(),
        vec![format!("{}/a", base_url)]
    );
    assert_eq!(report.frontier_size, 1);
    assert_eq!(report.visited_size, 1);
}

#[tokio::test]
async fn test_robots_failure_crawls_unrestricted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body><a href="/private">P</a></body></html>"#
            .to_string(),
    )
    .await;
    mount_html(
        &mock_server,
        "/private",
        r#"<html><head><title>Private</title></head></html>"#.to_string(),
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&base_url, &dir.path().join("result.txt"));

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.visited_size, 2);
    assert_eq!(report.pages_fetched, 2);
}

#[tokio::test]
async fn test_results_are_appended_across_runs() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "").await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Only</title></head><body></body></html>"#.to_string(),
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let results_path = dir.path().join("result.txt");

    crawl(create_test_config(&base_url, &results_path))
        .await
        .expect("First crawl failed");
    crawl(create_test_config(&base_url, &results_path))
        .await
        .expect("Second crawl failed");

    let content = std::fs::read_to_string(&results_path).expect("Failed to read results");
    assert_eq!(count_records(&content), 2);
}

#[tokio::test]
async fn test_crawl_from_toml_config() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /skip\n").await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/next">Next</a><a href="/skip">Skip</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_html(
        &mock_server,
        "/next",
        r#"<html><head><title>Next</title></head></html>"#.to_string(),
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let results_path = dir.path().join("result.txt");
    let toml = format!(
        r#"
[crawler]
seed-url = "{}/"
max-pages = 10
stats-interval-ms = 50

[fetch]
max-attempts = 1
backoff-step-ms = 0

[robots]
matching = "standard"

[output]
results-path = "{}"
"#,
        base_url,
        results_path.display()
    );

    let config = parse_config(&toml).expect("Failed to parse config");
    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.visited_size, 2);
    let content = std::fs::read_to_string(&results_path).expect("Failed to read results");
    assert!(content.contains("title: Next"));
    assert!(!content.contains("/skip"));
}

#[tokio::test]
async fn test_unwritable_results_path_fails_setup() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "").await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(
        &mock_server.uri(),
        &dir.path().join("missing").join("result.txt"),
    );

    assert!(crawl(config).await.is_err());
}
