//! DOM helpers over `dom_query`.
//!
//! Text extraction here mirrors how the reference pages are usually read by
//! hand: each descendant text node is trimmed, empty ones are dropped, and the
//! rest are joined with a caller-chosen separator.

pub use dom_query::{Document, Selection};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Full text content, trimmed at both ends.
#[inline]
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Trimmed, non-empty descendant text nodes in document order.
///
/// Text inside `script` and `style` is skipped.
#[must_use]
pub fn stripped_strings(sel: &Selection) -> Vec<String> {
    let Some(root) = sel.nodes().first() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }
        let in_code = node.parent().is_some_and(|p| {
            p.node_name().is_some_and(|tag| {
                tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
            })
        });
        if in_code {
            continue;
        }
        let text = node.text();
        let text = text.trim();
        if !text.is_empty() {
            out.push(text.to_string());
        }
    }
    out
}

/// Stripped text nodes joined with `sep`.
///
/// ```rust
/// use ballot_scrape::dom;
///
/// let doc = dom::parse("<div> Registered <b>voters</b> </div>");
/// let div = doc.select("div");
/// assert_eq!(dom::joined_text(&div, " | "), "Registered | voters");
/// assert_eq!(dom::stripped_text(&div), "Registeredvoters");
/// ```
#[must_use]
pub fn joined_text(sel: &Selection, sep: &str) -> String {
    stripped_strings(sel).join(sep)
}

/// Stripped text nodes concatenated without a separator.
#[inline]
#[must_use]
pub fn stripped_text(sel: &Selection) -> String {
    joined_text(sel, "")
}

/// First element matching `selector` beneath `sel`, if any.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// Next element with tag `tag` after `sel` in document order.
///
/// Unlike a sibling walk this climbs out of the element's ancestors, so a
/// heading wrapped in its own container still finds the table that follows
/// the container.
#[must_use]
pub fn find_next<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = sel.nodes().first().copied();

    while let Some(node) = current {
        let mut sibling = node.next_sibling();
        while let Some(sib) = sibling {
            if sib.is_element() {
                if sib
                    .node_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
                {
                    return Some(Selection::from(sib));
                }
                let nested = Selection::from(sib).select(tag);
                if let Some(first) = nested.nodes().first() {
                    return Some(Selection::from(*first));
                }
            }
            sibling = sib.next_sibling();
        }
        current = node.parent();
    }

    None
}

/// Iterate the individual elements of a selection.
pub fn each<'a, 'b>(sel: &'b Selection<'a>) -> impl Iterator<Item = Selection<'a>> + 'b {
    sel.nodes().iter().map(|node| Selection::from(*node))
}
