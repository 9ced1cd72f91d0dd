//! URL Builder
//!
//! Derives election and biography page URLs from free-text jurisdiction
//! names. Nothing here touches the network or checks that a jurisdiction
//! exists: a misspelled state simply yields a URL that 404s downstream.

use url::Url;

use crate::options::Options;

/// Replace spaces with underscores, the page-name convention of both sources.
#[inline]
#[must_use]
pub fn page_name(s: &str) -> String {
    s.replace(' ', "_")
}

/// Possessive suffix for a state name, already percent-encoded.
///
/// Purely lexical: any name whose last character is `s` gets a bare
/// apostrophe (`Texas'`), everything else gets `'s` (`Ohio's`).
#[inline]
#[must_use]
pub fn possessive_suffix(state: &str) -> &'static str {
    if state.ends_with('s') {
        "%27"
    } else {
        "%27s"
    }
}

/// House race page for a congressional district.
///
/// ```rust
/// use ballot_scrape::{url_builder, Options};
///
/// let url = url_builder::house_district_url(&Options::default(), "Texas", "3rd");
/// assert_eq!(
///     url,
///     "https://ballotpedia.org/Texas%27_3rd_Congressional_District_election,_2024"
/// );
/// ```
#[must_use]
pub fn house_district_url(options: &Options, state: &str, district: &str) -> String {
    format!(
        "{}/{}{}_{}_Congressional_District_election,_{}",
        options.ballotpedia_base,
        page_name(state),
        possessive_suffix(state),
        page_name(district),
        options.election_year
    )
}

/// State senate elections overview page (source of voter statistics).
#[must_use]
pub fn state_senate_url(options: &Options, state: &str) -> String {
    format!(
        "{}/{}_State_Senate_elections,_{}",
        options.ballotpedia_base,
        page_name(state),
        options.election_year
    )
}

/// U.S. Senate general election page for a state.
#[must_use]
pub fn senate_election_url(options: &Options, state: &str) -> String {
    format!(
        "{}/United_States_Senate_election_in_{},_{}",
        options.ballotpedia_base,
        page_name(state),
        options.election_year
    )
}

/// Municipal elections page for a county.
#[must_use]
pub fn municipal_url(options: &Options, county: &str, state: &str) -> String {
    format!(
        "{}/Municipal_elections_in_{},_{}_({})",
        options.ballotpedia_base,
        page_name(county),
        page_name(state),
        options.election_year
    )
}

/// Biography article keyed by the candidate's full name.
///
/// Runs of whitespace collapse to a single underscore.
#[must_use]
pub fn bio_url(options: &Options, name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    format!("{}/{}", options.wikipedia_base, words.join("_"))
}

/// Resolve a candidate link against the source origin.
///
/// Absolute links are returned unchanged; relative ones are joined onto
/// `base`. If `base` is not a valid URL the link is prefixed verbatim.
#[must_use]
pub fn absolutize(link: &str, base: &str) -> String {
    let link = link.trim();

    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }

    match Url::parse(base).and_then(|b| b.join(link)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => format!("{base}{link}"),
    }
}
