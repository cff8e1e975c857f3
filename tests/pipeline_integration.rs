//! Integration tests for the search pipeline
//!
//! These tests drive `Pipeline::run` and `run_search` against a local
//! wiremock server. Public hostnames are pinned to the mock server with
//! reqwest's DNS override, so no real network access happens.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use search_scrape::app::render_plain;
use search_scrape::fetch::HttpFetcher;
use search_scrape::robots::RobotsProbe;
use search_scrape::{
    run_search, Config, DuckDuckGoSearch, FixedUrls, LogFormat, LogLevel, Pipeline,
    PipelineSettings, RunOutcome, SearchProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOSTS: &[&str] = &[
    "a.example.com",
    "b.example.org",
    "www.example.com",
    "news.example.co.uk",
];

/// Client that sends every test hostname to the mock server
fn pinned_client(addr: SocketAddr) -> reqwest::Client {
    HOSTS
        .iter()
        .fold(reqwest::Client::builder(), |builder, host| {
            builder.resolve(host, addr)
        })
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client")
}

fn test_settings(delay: Duration) -> PipelineSettings {
    PipelineSettings {
        num_results: 10,
        delay,
        char_budget: 1000,
        top_tokens: 10,
    }
}

fn test_pipeline<P: SearchProvider>(server: &MockServer, provider: P, delay: Duration) -> Pipeline<P> {
    let client = pinned_client(*server.address());
    Pipeline::with_components(
        provider,
        HttpFetcher::new(client.clone(), 1, 1),
        RobotsProbe::new(client),
        test_settings(delay),
    )
}

/// URL on a pinned host, served by the mock server
fn pinned_url(server: &MockServer, host: &str, route: &str) -> String {
    format!("http://{host}:{}{route}", server.address().port())
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

#[tokio::test]
async fn test_one_page_succeeds_one_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/p1"))
        .respond_with(html_page("<html><body><p>Hello world</p></body></html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    // Only a.example.com is probed: the failed page never reaches that step
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
        .expect(1)
        .mount(&server)
        .await;

    let p1 = pinned_url(&server, "a.example.com", "/p1");
    let p2 = pinned_url(&server, "b.example.org", "/p2");
    let pipeline = test_pipeline(&server, FixedUrls(vec![p1.clone(), p2]), Duration::ZERO);

    let outcome = pipeline.run("hello").await;
    let report = outcome.report().expect("p1 should produce a record");

    assert_eq!(report.results.len(), 1);
    let record = &report.results[0];
    assert_eq!(record.url, p1);
    assert_eq!(record.domain, "example.com");
    assert_eq!(record.text, "Hello world");
    assert_eq!(record.published_time, "N/A");
    assert_eq!(record.title, "N/A");
    assert!(record.robots_present);
    assert_eq!(
        report.top_words,
        vec![("hello".to_string(), 1), ("world".to_string(), 1)]
    );
    assert_eq!(outcome.summary().failed, 1);
}

#[tokio::test]
async fn test_empty_discovery_reports_no_results() {
    let server = MockServer::start().await;
    let pipeline = test_pipeline(&server, FixedUrls(Vec::new()), Duration::ZERO);

    let outcome = pipeline.run("nothing").await;

    assert!(matches!(outcome, RunOutcome::NoResults(_)));
    assert_eq!(outcome.summary().discovered, 0);
    assert_eq!(render_plain(&outcome), "No results fetched.\n");
}

#[tokio::test]
async fn test_robots_probed_once_per_registrable_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(html_page("<p>Some text</p>"))
        .expect(3)
        .mount(&server)
        .await;
    // example.com (via a. and www.) and example.co.uk
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let urls = vec![
        pinned_url(&server, "a.example.com", "/page"),
        pinned_url(&server, "www.example.com", "/page"),
        pinned_url(&server, "news.example.co.uk", "/page"),
    ];
    let pipeline = test_pipeline(&server, FixedUrls(urls), Duration::ZERO);

    let outcome = pipeline.run("text").await;
    let report = outcome.report().expect("all pages should be recorded");

    let domains: Vec<&str> = report.results.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains, vec!["example.com", "example.com", "example.co.uk"]);
    assert!(report.results.iter().all(|r| !r.robots_present));
    assert_eq!(report.top_words[0], ("some".to_string(), 3));
}

#[tokio::test]
async fn test_failed_fetches_still_pace() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let delay = Duration::from_millis(150);
    let urls = vec![
        pinned_url(&server, "a.example.com", "/gone"),
        pinned_url(&server, "b.example.org", "/gone"),
    ];
    let pipeline = test_pipeline(&server, FixedUrls(urls), delay);

    let start = Instant::now();
    let outcome = pipeline.run("gone").await;

    assert!(matches!(outcome, RunOutcome::NoResults(_)));
    assert!(
        start.elapsed() >= delay * 2,
        "each failed URL should still wait out the delay"
    );
}

#[tokio::test]
async fn test_metadata_extracted_from_real_markup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(html_page(
            r#"<html><head>
                <title>Fallback title</title>
                <meta property="og:title" content="Launch day">
                <meta name="date" content="2024-01-01">
                <meta property="article:published_time" content="2024-03-05T10:00:00Z">
            </head><body>
                <p>  Rockets   launch. </p>
                <p></p>
                <p>Rockets <b>land</b>.</p>
            </body></html>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = pinned_url(&server, "news.example.co.uk", "/article");
    let pipeline = test_pipeline(&server, FixedUrls(vec![url]), Duration::ZERO);

    let outcome = pipeline.run("rockets").await;
    let record = &outcome.report().expect("article should be recorded").results[0];

    assert_eq!(record.title, "Launch day");
    assert_eq!(record.published_time, "2024-03-05T10:00:00Z");
    assert_eq!(record.domain, "example.co.uk");
    assert!(record.text.starts_with("Rockets"));
    assert!(record.text.contains("land"));
}

#[tokio::test]
async fn test_duckduckgo_discovery_feeds_pipeline() {
    let server = MockServer::start().await;
    let target = pinned_url(&server, "a.example.com", "/found");
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "found it"))
        .respond_with(html_page(&format!(
            r#"<div class="result"><a class="result__a" href="//duckduckgo.com/l/?uddg={encoded}">Found</a></div>"#
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/found"))
        .respond_with(html_page("<p>found it</p>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = pinned_client(*server.address());
    let provider = DuckDuckGoSearch::new(client, &format!("{}/html/", server.uri()))
        .expect("mock endpoint should parse");
    let pipeline = test_pipeline(&server, provider, Duration::ZERO);

    let outcome = pipeline.run("found it").await;
    let report = outcome.report().expect("discovered page should be recorded");

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].url, target);
    assert_eq!(report.results[0].text, "found it");
}

#[tokio::test]
async fn test_run_search_discovery_failure_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = Config {
        keyword: "unavailable".to_string(),
        search_endpoint: format!("{}/html/", server.uri()),
        delay_seconds: 0.0,
        retry_attempts: 1,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Config::default()
    };

    let outcome = run_search(config).await.expect("run should not fail");
    assert!(matches!(outcome, RunOutcome::NoResults(_)));
}
