//! HTTP API integration tests
//!
//! Requests go through the full filter chain, CORS included.

use std::sync::Arc;

use ballot_scrape::{server, Options, Scraper, ServerConfig};
use serde_json::Value;
use warp::http::StatusCode;

use crate::common::{
    bio_page, house_page, municipal_page, senate_page, MockFetcher, PanickingFetcher, COLLIN_MUNICIPAL_URL,
    CRUZ_BIO_URL, STATE_SENATE_PAGE, TEXAS_HOUSE_URL, TEXAS_SENATE_URL, TEXAS_STATE_SENATE_URL,
};

fn fetcher() -> MockFetcher {
    MockFetcher::new()
        .page(TEXAS_HOUSE_URL, &house_page())
        .page(TEXAS_SENATE_URL, &senate_page())
        .page(TEXAS_STATE_SENATE_URL, STATE_SENATE_PAGE)
        .page(COLLIN_MUNICIPAL_URL, &municipal_page())
        .page(CRUZ_BIO_URL, &bio_page())
}

async fn get(path: &str, config: &ServerConfig) -> (StatusCode, Value) {
    let scraper = Arc::new(Scraper::new(fetcher(), Options::default()));
    let routes = server::routes(scraper, config);
    let response = warp::test::request()
        .method("GET")
        .path(path)
        .reply(&routes)
        .await;

    let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (response.status(), body)
}

#[tokio::test]
async fn test_elections_response_shape() {
    let (status, body) = get(
        "/api/elections?state=Texas&district=3rd",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["houseCandidates"][0]["name"], "Keith Self");
    assert_eq!(body["houseCandidates"][1]["party"], "Sandeep Srivastava(D)");
    assert!(body["houseCandidates"][0].get("election").is_none());
    assert_eq!(body["senateCandidates"][0]["name"], "Ted Cruz");
    assert_eq!(body["voterInfo"][1]["Incumbents running"], "12");
}

#[tokio::test]
async fn test_elections_requires_district() {
    let (status, body) = get("/api/elections?state=Texas", &ServerConfig::default()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "State and district are required");
}

#[tokio::test]
async fn test_elections_rejects_empty_state() {
    let (status, _) = get(
        "/api/elections?state=&district=3rd",
        &ServerConfig::default(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_municipal_response_shape() {
    let (status, body) = get(
        "/api/municipal_candidates?county=Collin%20County&state=Texas",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidates"].as_array().map(Vec::len), Some(3));
    assert_eq!(
        body["candidates"][0]["election"],
        "General election for Plano City Council Place 2"
    );
    assert_eq!(body["demographics"][0]["label"], "Median household income");
}

#[tokio::test]
async fn test_municipal_requires_county() {
    let (status, body) = get(
        "/api/municipal_candidates?state=Texas",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "County and state are required");
}

#[tokio::test]
async fn test_municipal_unknown_county_is_empty_200() {
    let (status, body) = get(
        "/api/municipal_candidates?county=Nowhere%20County&state=Texas",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "candidates": [], "demographics": [] })
    );
}

#[tokio::test]
async fn test_candidate_bio_response_shape() {
    let (status, body) = get(
        "/api/candidate_bio?name=Ted%20Cruz&role=Senator",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imageUrl"], "https://upload.wikimedia.org/cruz.jpg");
    assert!(body["bio"]
        .as_str()
        .is_some_and(|bio| bio.starts_with("Rafael Edward Cruz")));
}

#[tokio::test]
async fn test_candidate_bio_requires_role() {
    let (status, body) = get("/api/candidate_bio?name=Ted%20Cruz", &ServerConfig::default()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Candidate name and role are required");
}

#[tokio::test]
async fn test_candidate_bio_unknown_person() {
    let (status, body) = get(
        "/api/candidate_bio?name=Nobody%20Atall&role=Mayor",
        &ServerConfig::default(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "No biography found.");
    assert!(body["imageUrl"].is_null());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = get("/api/governors?state=Texas", &ServerConfig::default()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let scraper = Arc::new(Scraper::new(fetcher(), Options::default()));
    let routes = server::routes(scraper, &ServerConfig::default());

    let response = warp::test::request()
        .method("GET")
        .path("/api/elections?state=Texas")
        .header("origin", "http://localhost:3000")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn test_cors_rejects_unlisted_origin() {
    let config = ServerConfig {
        cors_origins: vec!["https://vote.example.org".to_string()],
        ..ServerConfig::default()
    };
    let scraper = Arc::new(Scraper::new(fetcher(), Options::default()));
    let routes = server::routes(scraper, &config);

    let response = warp::test::request()
        .method("GET")
        .path("/api/elections?state=Texas&district=3rd")
        .header("origin", "https://elsewhere.example.com")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_crashed_scrape_is_500_with_error() {
    let scraper = Arc::new(Scraper::new(PanickingFetcher, Options::default()));
    let routes = server::routes(scraper, &ServerConfig::default());

    let response = warp::test::request()
        .method("GET")
        .path("/api/candidate_bio?name=Ted%20Cruz&role=Senator")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    assert!(body["error"].as_str().is_some_and(|e| e.contains("crashed")));
}

#[tokio::test]
async fn test_cors_preflight_allows_content_type_header() {
    let scraper = Arc::new(Scraper::new(fetcher(), Options::default()));
    let routes = server::routes(scraper, &ServerConfig::default());

    let response = warp::test::request()
        .method("OPTIONS")
        .path("/api/elections")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "GET")
        .header("access-control-request-headers", "content-type")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    assert!(allowed.contains("content-type"));
}
