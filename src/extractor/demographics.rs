//! Demographics Extractor
//!
//! Reads the census comparison widget of a municipal elections page. Only
//! rows with a header cell and exactly two value cells are kept.

use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::{CENSUS_ITEM, CENSUS_ITEM_HEADER, CENSUS_TABLE};
use crate::result::DemographicItem;

/// Census rows as `"local (Locality), state (State)"` values.
///
/// The locality and state labels come from `Options`, not from the page or
/// the query, so every county is labelled with the configured defaults.
#[must_use]
pub fn demographics(html: &str, options: &Options) -> Vec<DemographicItem> {
    let doc = dom::parse(html);
    let Some(table) = dom::each(&doc.select(CENSUS_TABLE)).next() else {
        debug!("no census table found");
        return Vec::new();
    };

    let mut items = Vec::new();
    for row in dom::each(&table.select("tr")) {
        let Some(header) = dom::first(&row, CENSUS_ITEM_HEADER) else {
            continue;
        };
        let cells: Vec<String> = dom::each(&row.select(CENSUS_ITEM))
            .map(|cell| dom::trimmed_text(&cell))
            .collect();
        let [local, state] = cells.as_slice() else {
            continue;
        };

        items.push(DemographicItem {
            label: dom::trimmed_text(&header),
            value: format!(
                "{local} ({}), {state} ({})",
                options.demographics_locality_label, options.demographics_state_label
            ),
        });
    }

    items
}
