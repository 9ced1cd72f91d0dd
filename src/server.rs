//! HTTP API.
//!
//! - `GET /api/elections?state=&district=`
//! - `GET /api/municipal_candidates?county=&state=`
//! - `GET /api/candidate_bio?name=&role=`
//!
//! Missing or empty parameters answer 400 with `{"error": ...}`. Each
//! request is scraped on its own task; if that task fails the answer is 500
//! with the failure message.

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::result::JurisdictionQuery;
use crate::scraper::Scraper;
use crate::settings::ServerConfig;

type Params = HashMap<String, String>;

fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// State and district for `/api/elections`.
///
/// # Errors
///
/// `Error::MissingParameter` if either is absent or empty.
pub fn district_query(params: &Params) -> Result<JurisdictionQuery> {
    match (param(params, "state"), param(params, "district")) {
        (Some(state), Some(district)) => Ok(JurisdictionQuery {
            state: state.to_string(),
            district: Some(district.to_string()),
            county: None,
        }),
        _ => Err(Error::MissingParameter("State and district are required")),
    }
}

/// County and state for `/api/municipal_candidates`.
///
/// # Errors
///
/// `Error::MissingParameter` if either is absent or empty.
pub fn county_query(params: &Params) -> Result<JurisdictionQuery> {
    match (param(params, "county"), param(params, "state")) {
        (Some(county), Some(state)) => Ok(JurisdictionQuery {
            state: state.to_string(),
            district: None,
            county: Some(county.to_string()),
        }),
        _ => Err(Error::MissingParameter("County and state are required")),
    }
}

/// Name and role for `/api/candidate_bio`.
///
/// # Errors
///
/// `Error::MissingParameter` if either is absent or empty.
pub fn bio_query(params: &Params) -> Result<(String, String)> {
    match (param(params, "name"), param(params, "role")) {
        (Some(name), Some(role)) => Ok((name.to_string(), role.to_string())),
        _ => Err(Error::MissingParameter("Candidate name and role are required")),
    }
}

fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn error_reply(err: &Error) -> Response {
    let status = if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        error!(error = %err, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    json_reply(&json!({ "error": err.to_string() }), status)
}

/// Run a scrape on its own task so a panic becomes a 500 instead of a
/// dropped connection.
async fn run<T, Fut>(work: Fut) -> Response
where
    T: Serialize + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(body) => json_reply(&body, StatusCode::OK),
        Err(err) => error_reply(&Error::Task(err.to_string())),
    }
}

async fn elections<F: Fetcher + 'static>(
    params: Params,
    scraper: Arc<Scraper<F>>,
) -> std::result::Result<Response, Infallible> {
    let query = match district_query(&params) {
        Ok(query) => query,
        Err(err) => return Ok(error_reply(&err)),
    };

    info!(state = %query.state, district = ?query.district, "fetching election data");
    let reply = run(async move { scraper.election_data(&query).await }).await;
    info!(status = %reply.status(), "election data request finished");
    Ok(reply)
}

async fn municipal_candidates<F: Fetcher + 'static>(
    params: Params,
    scraper: Arc<Scraper<F>>,
) -> std::result::Result<Response, Infallible> {
    let query = match county_query(&params) {
        Ok(query) => query,
        Err(err) => return Ok(error_reply(&err)),
    };

    info!(county = ?query.county, state = %query.state, "fetching municipal candidates");
    let reply = run(async move { scraper.municipal(&query).await }).await;
    info!(status = %reply.status(), "municipal request finished");
    Ok(reply)
}

async fn candidate_bio<F: Fetcher + 'static>(
    params: Params,
    scraper: Arc<Scraper<F>>,
) -> std::result::Result<Response, Infallible> {
    let (name, role) = match bio_query(&params) {
        Ok(pair) => pair,
        Err(err) => return Ok(error_reply(&err)),
    };

    Ok(run(async move { scraper.candidate_bio(&name, &role).await }).await)
}

fn with_scraper<F: Fetcher + 'static>(
    scraper: Arc<Scraper<F>>,
) -> impl Filter<Extract = (Arc<Scraper<F>>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&scraper))
}

fn cors(config: &ServerConfig) -> warp::cors::Builder {
    let builder = warp::cors()
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type", "accept", "authorization"]);
    if config.cors_origins.is_empty() {
        builder.allow_any_origin()
    } else {
        builder.allow_origins(config.cors_origins.iter().map(String::as_str))
    }
}

/// All API routes with CORS applied.
pub fn routes<F: Fetcher + 'static>(
    scraper: Arc<Scraper<F>>,
    config: &ServerConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let elections = warp::path!("api" / "elections")
        .and(warp::get())
        .and(warp::query::<Params>())
        .and(with_scraper(Arc::clone(&scraper)))
        .and_then(elections::<F>);

    let municipal = warp::path!("api" / "municipal_candidates")
        .and(warp::get())
        .and(warp::query::<Params>())
        .and(with_scraper(Arc::clone(&scraper)))
        .and_then(municipal_candidates::<F>);

    let bio = warp::path!("api" / "candidate_bio")
        .and(warp::get())
        .and(warp::query::<Params>())
        .and(with_scraper(scraper))
        .and_then(candidate_bio::<F>);

    elections.or(municipal).or(bio).with(cors(config))
}
