//! Configuration options for page targeting and extraction.
//!
//! The `Options` struct holds the source origins, the election cycle and the
//! thresholds used by the extractors. The defaults reproduce the behavior of
//! the public API exactly; changing them is meant for testing against mirrors
//! or for a different cycle.

use serde::Deserialize;

/// Configuration options for scraping.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use ballot_scrape::Options;
///
/// let options = Options {
///     election_year: 2026,
///     ..Options::default()
/// };
/// assert_eq!(options.max_candidates, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Origin of the election reference site, without trailing slash.
    ///
    /// Used to build every election page URL and to absolutize
    /// house/senate candidate links.
    ///
    /// Default: `"https://ballotpedia.org"`
    pub ballotpedia_base: String,

    /// Article root of the encyclopedia used for biographies.
    ///
    /// Default: `"https://en.wikipedia.org/wiki"`
    pub wikipedia_base: String,

    /// Election cycle embedded in page names.
    ///
    /// Default: `2024`
    pub election_year: u16,

    /// Result rows inspected per house/senate general election table.
    ///
    /// Municipal tables are never capped.
    ///
    /// Default: `2`
    pub max_candidates: usize,

    /// Biography accumulation stops once the buffer is longer than this
    /// (characters). The paragraph crossing the limit is kept whole.
    ///
    /// Default: `500`
    pub bio_stop_len: usize,

    /// Biographies shorter than this (characters, after trimming) are
    /// replaced by the "no relevant biography" sentinel.
    ///
    /// Default: `100`
    pub bio_min_len: usize,

    /// Locality label appended to the first demographic value.
    ///
    /// Not derived from the query county.
    ///
    /// Default: `"Collin County"`
    pub demographics_locality_label: String,

    /// State label appended to the second demographic value.
    ///
    /// Not derived from the query state.
    ///
    /// Default: `"Texas"`
    pub demographics_state_label: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ballotpedia_base: "https://ballotpedia.org".to_string(),
            wikipedia_base: "https://en.wikipedia.org/wiki".to_string(),
            election_year: 2024,
            max_candidates: 2,
            bio_stop_len: 500,
            bio_min_len: 100,
            demographics_locality_label: "Collin County".to_string(),
            demographics_state_label: "Texas".to_string(),
        }
    }
}
