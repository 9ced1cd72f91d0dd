//! # ballot-scrape
//!
//! Election candidate, voter statistic and biography extraction from public
//! election reference pages, with a small HTTP API on top.
//!
//! Given a jurisdiction (state, congressional district, county) the crate
//! builds the reference page URL, fetches it once, locates the general
//! election results block and extracts candidate names, parties and profile
//! links, plus census and voter statistics. Biographies come from an
//! encyclopedia article keyed by the candidate's name.
//!
//! ## Quick Start
//!
//! ```rust
//! use ballot_scrape::extractor;
//!
//! let html = r#"<div class="vis_widget_row">
//!     <div class="vis_widget_desc">Seats up</div>
//!     <div class="vis_widget_value">16 of 31</div></div>"#;
//!
//! let rows = extractor::voter_info(html);
//! assert_eq!(rows[0].description, "Seats up");
//! ```
//!
//! Live scraping goes through a [`Scraper`] built on a [`Fetcher`]:
//!
//! ```rust,no_run
//! use ballot_scrape::{HttpFetcher, JurisdictionQuery, Options, Scraper};
//!
//! # async fn run() -> ballot_scrape::Result<()> {
//! let scraper = Scraper::new(HttpFetcher::new(None)?, Options::default());
//! let query = JurisdictionQuery {
//!     state: "Texas".to_string(),
//!     district: Some("3rd".to_string()),
//!     county: None,
//! };
//! let data = scraper.election_data(&query).await;
//! println!("{} house candidates", data.house_candidates.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Degradation
//!
//! An unavailable page, a missing section or a malformed row never produces
//! an error: results shrink to empty lists or sentinel biographies. Only
//! request validation and internal failures surface as errors.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Compiled patterns and CSS selectors for the reference pages.
pub mod patterns;

/// Page URL construction from jurisdiction names.
pub mod url_builder;

/// Character encoding of fetched pages.
pub mod encoding;

/// Single-shot page retrieval.
pub mod fetch;

/// Section, record, demographic, voter info and biography extraction.
pub mod extractor;

/// Fetch-and-extract per query.
pub mod scraper;

/// Startup configuration for the HTTP API.
pub mod settings;

/// HTTP routes.
pub mod server;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{Fetched, Fetcher, HttpFetcher};
pub use options::Options;
pub use result::{
    BioResult, CandidateRecord, DemographicItem, ElectionData, JurisdictionQuery, MunicipalData,
    VoterInfoItem, NO_BIOGRAPHY, NO_RELEVANT_BIOGRAPHY,
};
pub use scraper::Scraper;
pub use settings::ServerConfig;
