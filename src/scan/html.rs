// src/scan/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Relative links are NOT resolved against a base URL:
// we want to know what the helpers make of the href exactly as a template
// would emit it.
// =============================================================================

use scraper::{Html, Selector};

use super::is_reportable_link;

// Extracts all links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> with every reportable href, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='mailto:x@y.z'>Mail</a>"
//   result = ["/docs"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| is_reportable_link(href))
        .map(str::to_string)
        .collect()
}
