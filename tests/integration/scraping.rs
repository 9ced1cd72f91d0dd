//! Scraper integration tests
//!
//! Fetch-and-extract for every query kind, including the degraded paths.

use ballot_scrape::{
    BioResult, ElectionData, JurisdictionQuery, MunicipalData, Options, Scraper, NO_BIOGRAPHY,
};

use crate::common::{
    bio_page, house_page, municipal_page, senate_page, MockFetcher, COLLIN_MUNICIPAL_URL,
    CRUZ_BIO_URL, STATE_SENATE_PAGE, TEXAS_HOUSE_URL, TEXAS_SENATE_URL, TEXAS_STATE_SENATE_URL,
};

fn texas_district() -> JurisdictionQuery {
    JurisdictionQuery {
        state: "Texas".to_string(),
        district: Some("3rd".to_string()),
        county: None,
    }
}

fn collin_county() -> JurisdictionQuery {
    JurisdictionQuery {
        state: "Texas".to_string(),
        district: None,
        county: Some("Collin County".to_string()),
    }
}

#[tokio::test]
async fn test_election_data_end_to_end() {
    let fetcher = MockFetcher::new()
        .page(TEXAS_HOUSE_URL, &house_page())
        .page(TEXAS_SENATE_URL, &senate_page())
        .page(TEXAS_STATE_SENATE_URL, STATE_SENATE_PAGE);
    let scraper = Scraper::new(fetcher, Options::default());

    let data = scraper.election_data(&texas_district()).await;

    let house: Vec<&str> = data.house_candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(house, ["Keith Self", "Sandeep Srivastava"]);
    assert_eq!(data.house_candidates[0].party, "Keith Self(R)");
    assert_eq!(
        data.house_candidates[0].link,
        "https://ballotpedia.org/Keith_Self"
    );

    assert_eq!(data.senate_candidates.len(), 2);
    assert_eq!(data.senate_candidates[0].name, "Ted Cruz");
    assert_eq!(
        data.senate_candidates[1].link,
        "https://ballotpedia.org/Colin_Allred"
    );

    assert_eq!(data.voter_info.len(), 2);
    assert_eq!(data.voter_info[0].description, "Seats up for election");
    assert_eq!(data.voter_info[0].value, "15 | of 31");
    assert_eq!(data.voter_info[1].value, "12");
}

#[tokio::test]
async fn test_election_data_degrades_per_page() {
    let fetcher = MockFetcher::new()
        .page(TEXAS_SENATE_URL, &senate_page())
        .status(TEXAS_STATE_SENATE_URL, 503, STATE_SENATE_PAGE);
    let scraper = Scraper::new(fetcher, Options::default());

    let data = scraper.election_data(&texas_district()).await;

    assert!(data.house_candidates.is_empty());
    assert_eq!(data.senate_candidates.len(), 2);
    assert!(data.voter_info.is_empty());
}

#[tokio::test]
async fn test_election_data_requests_each_page_once() {
    let fetcher = MockFetcher::new();
    let scraper = Scraper::new(&fetcher, Options::default());

    assert_eq!(
        scraper.election_data(&texas_district()).await,
        ElectionData::default()
    );

    let mut requested = fetcher.requested();
    requested.sort();
    assert_eq!(
        requested,
        [TEXAS_HOUSE_URL, TEXAS_STATE_SENATE_URL, TEXAS_SENATE_URL]
    );
}

#[tokio::test]
async fn test_possessive_for_state_not_ending_in_s() {
    let url = "https://ballotpedia.org/New_York%27s_3rd_Congressional_District_election,_2024";
    let fetcher = MockFetcher::new().page(url, &house_page());
    let scraper = Scraper::new(fetcher, Options::default());

    let house = scraper.house_candidates("New York", "3rd").await;
    assert_eq!(house.len(), 2);
}

#[tokio::test]
async fn test_election_year_option_changes_page() {
    let url = "https://ballotpedia.org/United_States_Senate_election_in_Texas,_2026";
    let fetcher = MockFetcher::new().page(url, &senate_page());
    let options = Options {
        election_year: 2026,
        ..Options::default()
    };
    let scraper = Scraper::new(fetcher, options);

    assert_eq!(scraper.senate_candidates("Texas").await.len(), 2);
}

#[tokio::test]
async fn test_municipal_end_to_end() {
    let fetcher = MockFetcher::new().page(COLLIN_MUNICIPAL_URL, &municipal_page());
    let scraper = Scraper::new(fetcher, Options::default());

    let data = scraper.municipal(&collin_county()).await;

    assert_eq!(data.candidates.len(), 3);
    assert_eq!(data.candidates[0].party, "Nonpartisan");
    assert_eq!(data.candidates[1].party, "No Party Affiliation");
    assert_eq!(data.candidates[2].party, "Republican");
    assert_eq!(data.candidates[2].link, "/Jim_Skinner");
    assert_eq!(
        data.candidates[2].election.as_deref(),
        Some("General election for Collin County Sheriff")
    );

    assert_eq!(data.demographics.len(), 1);
    assert_eq!(data.demographics[0].label, "Median household income");
    assert_eq!(
        data.demographics[0].value,
        "$113,255 (Collin County), $73,035 (Texas)"
    );
}

#[tokio::test]
async fn test_municipal_unavailable_page_is_empty() {
    let fetcher = MockFetcher::new().status(COLLIN_MUNICIPAL_URL, 404, "");
    let scraper = Scraper::new(fetcher, Options::default());

    assert_eq!(
        scraper.municipal(&collin_county()).await,
        MunicipalData::default()
    );
}

#[tokio::test]
async fn test_candidate_bio_end_to_end() {
    let fetcher = MockFetcher::new().page(CRUZ_BIO_URL, &bio_page());
    let scraper = Scraper::new(fetcher, Options::default());

    let bio = scraper.candidate_bio("Ted Cruz", "Senator").await;

    assert!(bio.bio.starts_with("Rafael Edward Cruz"));
    assert!(!bio.bio.contains("[1]"));
    assert!(bio.bio.contains('\n'));
    assert_eq!(
        bio.image_url.as_deref(),
        Some("https://upload.wikimedia.org/cruz.jpg")
    );
}

#[tokio::test]
async fn test_candidate_bio_missing_article() {
    let fetcher = MockFetcher::new().status(CRUZ_BIO_URL, 404, "<p>Not here</p>");
    let scraper = Scraper::new(fetcher, Options::default());

    let bio = scraper.candidate_bio("Ted Cruz", "Senator").await;
    assert_eq!(bio, BioResult::not_found());
    assert_eq!(bio.bio, NO_BIOGRAPHY);
}
