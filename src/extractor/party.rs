//! Party codes used in municipal results tables.

/// Map a one-letter party code to its full name.
///
/// Unknown input, including names that are already spelled out, is returned
/// unchanged.
///
/// ```rust
/// use ballot_scrape::extractor::party::full_party_name;
///
/// assert_eq!(full_party_name("R"), "Republican");
/// assert_eq!(full_party_name("Green"), "Green");
/// ```
#[must_use]
pub fn full_party_name(code: &str) -> &str {
    match code {
        "R" => "Republican",
        "D" => "Democrat",
        "I" => "Independent",
        "W" => "Write-in",
        "N" => "No Party Affiliation",
        other => other,
    }
}

/// Party code from a results cell: the last whitespace token with
/// parentheses removed, e.g. `"Jane Roe (D)"` gives `"D"`.
#[must_use]
pub fn party_code(cell_text: &str) -> Option<String> {
    let last = cell_text.split_whitespace().next_back()?;
    Some(last.replace(['(', ')'], "").trim().to_string())
}
