//! Result types for extraction output.
//!
//! These are the records produced by the extractors and the envelopes the
//! HTTP API serializes. JSON field names follow the public API contract.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Biography text returned when the article page could not be fetched or has
/// no paragraphs.
pub const NO_BIOGRAPHY: &str = "No biography found.";

/// Biography text returned when the collected paragraphs are too short.
pub const NO_RELEVANT_BIOGRAPHY: &str = "No relevant biography found.";

/// Jurisdiction used to target a page. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JurisdictionQuery {
    /// State name as typed, e.g. `"New York"`.
    pub state: String,

    /// Congressional district label, e.g. `"3rd"`.
    pub district: Option<String>,

    /// County name, e.g. `"Collin County"`.
    pub county: Option<String>,
}

/// One candidate from a general election results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    /// Visible anchor text.
    pub name: String,

    /// Party, either the cell text (house/senate) or a mapped full name
    /// (municipal).
    pub party: String,

    /// Profile link.
    pub link: String,

    /// Heading text of the election the record came from (municipal only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub election: Option<String>,
}

/// One census comparison row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemographicItem {
    /// Row header text.
    pub label: String,

    /// `"localValue (Locality), stateValue (State)"`.
    pub value: String,
}

/// One statistic row from a state overview page.
///
/// Serializes as a single-key object `{description: value}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterInfoItem {
    pub description: String,
    pub value: String,
}

impl Serialize for VoterInfoItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.description, &self.value)?;
        map.end()
    }
}

/// Candidate biography with an optional portrait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BioResult {
    pub bio: String,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl BioResult {
    /// Sentinel for an unavailable page.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            bio: NO_BIOGRAPHY.to_string(),
            image_url: None,
        }
    }

    /// Sentinel for a page whose introduction is too short to be useful.
    #[must_use]
    pub fn not_relevant() -> Self {
        Self {
            bio: NO_RELEVANT_BIOGRAPHY.to_string(),
            image_url: None,
        }
    }
}

/// Response body of `/api/elections`. Field order is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionData {
    pub house_candidates: Vec<CandidateRecord>,
    pub senate_candidates: Vec<CandidateRecord>,
    pub voter_info: Vec<VoterInfoItem>,
}

/// Response body of `/api/municipal_candidates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MunicipalData {
    pub candidates: Vec<CandidateRecord>,
    pub demographics: Vec<DemographicItem>,
}
