//! Per-query scraping: build the URL, fetch, extract.
//!
//! A page that cannot be fetched yields the same empty result as a page with
//! no matching section. Nothing here returns an error.

use tracing::{debug, info, warn};

use crate::extractor;
use crate::fetch::{Fetched, Fetcher};
use crate::options::Options;
use crate::result::{
    BioResult, CandidateRecord, ElectionData, JurisdictionQuery, MunicipalData, VoterInfoItem,
};
use crate::url_builder;

/// Composes a [`Fetcher`] with the extractors.
///
/// Holds no per-request state, so one instance can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Scraper<F> {
    fetcher: F,
    options: Options,
}

impl<F: Fetcher> Scraper<F> {
    #[must_use]
    pub fn new(fetcher: F, options: Options) -> Self {
        Self { fetcher, options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Fetched::Document(body) => Some(body),
            Fetched::NotFound { status } => {
                warn!(url, ?status, "failed to access page");
                None
            }
        }
    }

    /// First two general election candidates for a congressional district.
    pub async fn house_candidates(&self, state: &str, district: &str) -> Vec<CandidateRecord> {
        let url = url_builder::house_district_url(&self.options, state, district);
        match self.fetch_page(&url).await {
            Some(html) => extractor::house_candidates(&html, &self.options),
            None => Vec::new(),
        }
    }

    /// First two general election candidates for the state's U.S. Senate race.
    pub async fn senate_candidates(&self, state: &str) -> Vec<CandidateRecord> {
        let url = url_builder::senate_election_url(&self.options, state);
        match self.fetch_page(&url).await {
            Some(html) => extractor::senate_candidates(&html, &self.options),
            None => Vec::new(),
        }
    }

    /// Statistic rows from the state senate elections overview.
    pub async fn voter_info(&self, state: &str) -> Vec<VoterInfoItem> {
        let url = url_builder::state_senate_url(&self.options, state);
        match self.fetch_page(&url).await {
            Some(html) => extractor::voter_info(&html),
            None => Vec::new(),
        }
    }

    /// House, senate and voter info for a district query.
    ///
    /// The three pages are fetched concurrently; the response order is fixed.
    pub async fn election_data(&self, query: &JurisdictionQuery) -> ElectionData {
        let district = query.district.as_deref().unwrap_or_default();
        let (house_candidates, senate_candidates, voter_info) = tokio::join!(
            self.house_candidates(&query.state, district),
            self.senate_candidates(&query.state),
            self.voter_info(&query.state),
        );

        ElectionData {
            house_candidates,
            senate_candidates,
            voter_info,
        }
    }

    /// Municipal candidates and county demographics for a county query.
    pub async fn municipal(&self, query: &JurisdictionQuery) -> MunicipalData {
        let county = query.county.as_deref().unwrap_or_default();
        let url = url_builder::municipal_url(&self.options, county, &query.state);
        info!(%url, "accessing municipal elections page");

        let Some(html) = self.fetch_page(&url).await else {
            return MunicipalData::default();
        };

        let data = MunicipalData {
            candidates: extractor::municipal_candidates(&html),
            demographics: extractor::demographics(&html, &self.options),
        };
        info!(
            candidates = data.candidates.len(),
            demographics = data.demographics.len(),
            "municipal page extracted"
        );
        data
    }

    /// Biography for a candidate.
    ///
    /// `role` is accepted for future disambiguation between namesakes and is
    /// not used yet.
    pub async fn candidate_bio(&self, name: &str, role: &str) -> BioResult {
        let url = url_builder::bio_url(&self.options, name);
        debug!(%url, role, "fetching biography");
        match self.fetch_page(&url).await {
            Some(html) => extractor::biography(&html, &self.options),
            None => BioResult::not_found(),
        }
    }
}
