//! HTML-to-text rendering for chapter bodies and comment text.
//!
//! Catalog content is a rich-text string trusted only by assumption. Instead
//! of passing markup through to the terminal, the fragment is parsed and only
//! its text content is kept: block-level elements become paragraphs separated
//! by a blank line, everything else is flattened to plain text.

use scraper::{Html, Selector};

const BLOCK_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, li";

/// Renders an HTML fragment to display text.
///
/// Plain strings pass through unchanged (modulo whitespace normalization),
/// so callers don't need to know whether a field was marked up.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse(BLOCK_SELECTOR).unwrap();

    // Nested blocks (a paragraph inside a list item, say) match the selector
    // too; only the outermost match may emit text or it would appear twice.
    let blocks: Vec<String> = fragment
        .select(&selector)
        .filter(|el| !has_block_ancestor(el, &selector))
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .filter(|block| !block.is_empty())
        .collect();

    if blocks.is_empty() {
        // No block elements: inline markup or plain text. Keep the text nodes.
        normalize_ws(&fragment.root_element().text().collect::<String>())
    } else {
        blocks.join("\n\n")
    }
}

fn has_block_ancestor(el: &scraper::ElementRef, selector: &Selector) -> bool {
    el.ancestors()
        .filter_map(scraper::ElementRef::wrap)
        .any(|ancestor| selector.matches(&ancestor))
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
