//! Voter Info Extractor
//!
//! Statistic rows from the widget on a state senate elections overview page.
//! Multi-part values are joined with `" | "`.

use crate::dom;
use crate::patterns::{WIDGET_DESC, WIDGET_ROW, WIDGET_VALUE};
use crate::result::VoterInfoItem;

/// Widget rows in document order. Rows lacking a description or a value are
/// skipped.
#[must_use]
pub fn voter_info(html: &str) -> Vec<VoterInfoItem> {
    let doc = dom::parse(html);

    dom::each(&doc.select(WIDGET_ROW))
        .filter_map(|row| {
            let desc = dom::first(&row, WIDGET_DESC)?;
            let value = dom::first(&row, WIDGET_VALUE)?;
            Some(VoterInfoItem {
                description: dom::stripped_text(&desc),
                value: dom::joined_text(&value, " | "),
            })
        })
        .collect()
}
