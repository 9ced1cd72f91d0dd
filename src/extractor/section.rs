//! Section Locator
//!
//! Finds the headings that introduce general election blocks and the results
//! table following each one. Absence is a normal outcome and is returned as
//! `None` or an empty list, never as an error.

use dom_query::{Document, Selection};

use crate::dom;

/// Case-insensitive substring test against a heading's text.
#[must_use]
pub fn heading_matches(heading: &Selection, fragment: &str) -> bool {
    heading
        .text()
        .to_lowercase()
        .contains(&fragment.to_lowercase())
}

/// All headings matching `selector` whose text contains `fragment`, in
/// document order.
#[must_use]
pub fn matching_headings<'a>(
    doc: &'a Document,
    selector: &str,
    fragment: &str,
) -> Vec<Selection<'a>> {
    dom::each(&doc.select(selector))
        .filter(|heading| heading_matches(heading, fragment))
        .collect()
}

/// First heading matching `selector` whose text contains `fragment`.
#[must_use]
pub fn locate<'a>(doc: &'a Document, selector: &str, fragment: &str) -> Option<Selection<'a>> {
    dom::each(&doc.select(selector)).find(|heading| heading_matches(heading, fragment))
}

/// The first table after `heading` in document order.
#[inline]
#[must_use]
pub fn results_table<'a>(heading: &Selection<'a>) -> Option<Selection<'a>> {
    dom::find_next(heading, "table")
}
