//! Bio Extractor
//!
//! Introductory biography and portrait from an encyclopedia article.
//!
//! Paragraphs are read in document order and each one is cleaned in three
//! passes: citation markers removed, straight quotes removed, then every word
//! ending in `ss` rewritten to end in `s's`. Accumulation stops after the
//! paragraph that pushes the buffer past `bio_stop_len` characters.

use crate::dom;
use crate::options::Options;
use crate::patterns::{CITATION_MARKER, DOUBLE_S_REPLACEMENT, DOUBLE_S_WORD, INFOBOX};
use crate::result::{BioResult, NO_BIOGRAPHY};

/// Protocol-relative infobox image, made absolute with `https:`.
#[must_use]
pub fn infobox_image(doc: &dom::Document) -> Option<String> {
    let infobox = dom::each(&doc.select(INFOBOX)).next()?;
    let image = dom::first(&infobox, "img")?;
    let src = dom::attr(&image, "src")?;
    Some(format!("https:{src}"))
}

/// Apply the three cleaning passes to one paragraph.
#[must_use]
pub fn clean_paragraph(text: &str) -> String {
    let text = CITATION_MARKER.replace_all(text, "");
    let text: String = text.chars().filter(|c| *c != '"' && *c != '\'').collect();
    DOUBLE_S_WORD
        .replace_all(&text, DOUBLE_S_REPLACEMENT)
        .into_owned()
}

/// Biography for an article page.
///
/// The image is only returned alongside a usable biography: when the text
/// is shorter than `bio_min_len` the "no relevant biography" sentinel is
/// returned without it.
#[must_use]
pub fn biography(html: &str, options: &Options) -> BioResult {
    let doc = dom::parse(html);
    let image_url = infobox_image(&doc);

    let paragraphs = doc.select("p");
    if !paragraphs.exists() {
        return BioResult {
            bio: NO_BIOGRAPHY.to_string(),
            image_url,
        };
    }

    let mut bio = String::new();
    let mut bio_len = 0;
    for paragraph in dom::each(&paragraphs) {
        let text = paragraph.text();
        if text.trim().is_empty() {
            continue;
        }

        let cleaned = clean_paragraph(&text);
        let cleaned = cleaned.trim();
        bio.push_str(cleaned);
        bio.push('\n');
        bio_len += cleaned.chars().count() + 1;

        if bio_len > options.bio_stop_len {
            break;
        }
    }

    let bio = bio.trim();
    if bio.chars().count() < options.bio_min_len {
        return BioResult::not_relevant();
    }

    BioResult {
        bio: bio.to_string(),
        image_url,
    }
}
