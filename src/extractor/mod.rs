//! Extraction from fetched election and biography pages.
//!
//! Every extractor takes the page HTML and returns plain records. A missing
//! section, table, row or cell yields fewer records (or a sentinel), never an
//! error.
//!
//! # Module Structure
//!
//! - `section`: general election heading and results table lookup
//! - `candidates`: candidate rows (house/senate and municipal variants)
//! - `party`: party code table
//! - `demographics`: census comparison widget
//! - `voter_info`: state overview statistic widget
//! - `bio`: article introduction and infobox portrait
//!
//! # Usage
//!
//! ```rust
//! use ballot_scrape::extractor;
//! use ballot_scrape::Options;
//!
//! let html = r#"<h5>General election</h5><table>
//!     <tr class="results_row"><td class="votebox-results-cell--text">
//!         <a href="/Jane_Roe">Jane Roe</a></td></tr></table>"#;
//! let records = extractor::house_candidates(html, &Options::default());
//! assert_eq!(records[0].link, "https://ballotpedia.org/Jane_Roe");
//! ```

pub mod bio;
pub mod candidates;
pub mod demographics;
pub mod party;
pub mod section;
pub mod voter_info;

pub use bio::biography;
pub use candidates::{house_candidates, municipal_candidates, senate_candidates};
pub use demographics::demographics;
pub use voter_info::voter_info;
