//! Record Extractor
//!
//! Candidate rows from general election results tables. The house/senate and
//! municipal variants read rows differently and are kept separate:
//!
//! - house/senate: at most `max_candidates` rows, name and link from the
//!   row's first anchor, party is the results cell text as-is, link is
//!   absolutized against the source origin.
//! - municipal: every row of every general election table, name and link
//!   from the anchor inside the results cell, party code mapped to a full
//!   name, link kept as found, tagged with the heading text.
//!
//! Rows missing an anchor, an `href` or the results cell are dropped.

use dom_query::Selection;
use tracing::info;

use super::party::{full_party_name, party_code};
use super::section;
use crate::dom;
use crate::options::Options;
use crate::patterns::{
    ANY_HEADING, ELECTION_TYPE_HEADING, GENERAL_ELECTION, RESULTS_ROW, RESULTS_TEXT_CELL,
};
use crate::result::CandidateRecord;
use crate::url_builder::absolutize;

/// House candidates from a congressional district page.
///
/// Only the first `h5` mentioning a general election is considered.
#[must_use]
pub fn house_candidates(html: &str, options: &Options) -> Vec<CandidateRecord> {
    let doc = dom::parse(html);

    let Some(heading) = section::locate(&doc, ANY_HEADING, GENERAL_ELECTION) else {
        info!("no general election section found");
        return Vec::new();
    };

    match section::results_table(&heading) {
        Some(table) => capped_rows(&table, options),
        None => {
            info!("no general election candidate information found");
            Vec::new()
        }
    }
}

/// Senate candidates from a U.S. Senate election page.
///
/// Election-type headings are tried in order; the first general election
/// heading with a following table wins and the rest are ignored.
#[must_use]
pub fn senate_candidates(html: &str, options: &Options) -> Vec<CandidateRecord> {
    let doc = dom::parse(html);
    let headings = section::matching_headings(&doc, ELECTION_TYPE_HEADING, GENERAL_ELECTION);

    if headings.is_empty() {
        info!("no general election section found for senate election");
        return Vec::new();
    }

    headings
        .iter()
        .find_map(section::results_table)
        .map(|table| capped_rows(&table, options))
        .unwrap_or_default()
}

/// Candidates for every general election on a municipal elections page.
#[must_use]
pub fn municipal_candidates(html: &str) -> Vec<CandidateRecord> {
    let doc = dom::parse(html);
    let mut candidates = Vec::new();

    for heading in section::matching_headings(&doc, ELECTION_TYPE_HEADING, GENERAL_ELECTION) {
        let election = dom::trimmed_text(&heading);
        let Some(table) = section::results_table(&heading) else {
            continue;
        };
        candidates.extend(
            dom::each(&table.select(RESULTS_ROW))
                .filter_map(|row| municipal_row(&row, &election)),
        );
    }

    candidates
}

fn capped_rows(table: &Selection, options: &Options) -> Vec<CandidateRecord> {
    dom::each(&table.select(RESULTS_ROW))
        .take(options.max_candidates)
        .filter_map(|row| federal_row(&row, &options.ballotpedia_base))
        .collect()
}

fn federal_row(row: &Selection, base: &str) -> Option<CandidateRecord> {
    let anchor = dom::first(row, "a")?;
    let href = dom::attr(&anchor, "href")?;
    let cell = dom::first(row, RESULTS_TEXT_CELL)?;

    Some(CandidateRecord {
        name: dom::stripped_text(&anchor),
        party: dom::stripped_text(&cell),
        link: absolutize(&href, base),
        election: None,
    })
}

fn municipal_row(row: &Selection, election: &str) -> Option<CandidateRecord> {
    let cell = dom::first(row, RESULTS_TEXT_CELL)?;
    let anchor = dom::first(&cell, "a")?;
    let link = dom::attr(&anchor, "href")?;
    let code = party_code(&dom::trimmed_text(&cell))?;

    Some(CandidateRecord {
        name: dom::trimmed_text(&anchor),
        party: full_party_name(&code).to_string(),
        link,
        election: Some(election.to_string()),
    })
}
