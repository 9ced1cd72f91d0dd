//! Compiled regex patterns and CSS selectors for the reference pages.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Election page selectors
// =============================================================================

/// Heading text that introduces a general election block (matched lowercase).
pub const GENERAL_ELECTION: &str = "general election";

/// Any level-5 heading. House pages are matched on this alone.
pub const ANY_HEADING: &str = "h5";

/// Votebox election-type heading used on senate and municipal pages.
pub const ELECTION_TYPE_HEADING: &str = "h5.votebox-header-election-type";

/// One candidate row inside a votebox results table.
pub const RESULTS_ROW: &str = "tr.results_row";

/// Cell holding the candidate anchor and party marker.
pub const RESULTS_TEXT_CELL: &str = "td.votebox-results-cell--text";

// =============================================================================
// Overview page selectors
// =============================================================================

pub const CENSUS_TABLE: &str = "table.census-table-widget";
pub const CENSUS_ITEM_HEADER: &str = "th.census-table-census-item-header";
pub const CENSUS_ITEM: &str = "td.census-table-census-item";

pub const WIDGET_ROW: &str = "div.vis_widget_row";
pub const WIDGET_DESC: &str = "div.vis_widget_desc";
pub const WIDGET_VALUE: &str = "div.vis_widget_value";

// =============================================================================
// Biography page
// =============================================================================

pub const INFOBOX: &str = "table.infobox";

/// Bracketed citation markers such as `[12]`.
pub static CITATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("CITATION_MARKER regex"));

/// Any word ending in `ss`. Rewritten to end in `s's`, so "Congress"
/// becomes "Congres's". Applied to every match, not just plurals.
pub static DOUBLE_S_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)ss\b").expect("DOUBLE_S_WORD regex"));

/// Replacement for [`DOUBLE_S_WORD`].
pub const DOUBLE_S_REPLACEMENT: &str = "${1}s's";
