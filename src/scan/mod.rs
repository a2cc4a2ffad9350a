// src/scan/mod.rs
// =============================================================================
// This module runs the URL helpers over every link in a document.
//
// Submodules:
// - html: Extracts links from HTML pages
// - markdown: Extracts links from markdown text
//
// For each unique link we report what a template would render for it:
// whether it is external, its <a> attributes and its display domain.
// =============================================================================

mod html;
mod markdown;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::links::{self, DomainOptions, SiteContext};

pub use html::extract_html_links;
pub use markdown::extract_markdown_links;

/// The kind of document being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Markdown,
}

impl DocumentKind {
    // Guesses from a file extension; anything unknown is treated as HTML
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension.map(str::to_ascii_lowercase).as_deref() {
            Some("md") | Some("markdown") => DocumentKind::Markdown,
            _ => DocumentKind::Html,
        }
    }
}

// Represents what the helpers produce for a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReport {
    /// The link as written in the document
    pub url: String,
    /// Whether the link leaves the site
    pub external: bool,
    /// The <a> attribute string
    pub attributes: String,
    /// The domain shown to readers (www. stripped)
    pub domain: String,
}

impl LinkReport {
    // Links passed in are never empty, so the attributes always exist
    pub fn new(url: String, site: &SiteContext) -> Self {
        let attributes = links::get_link_attributes(&url, site).unwrap_or_default();
        LinkReport {
            external: links::is_external_url(&url, site),
            domain: links::url_to_domain(&url, DomainOptions::default().strip_www(true)),
            attributes,
            url,
        }
    }
}

// Extracts the links of a document and reports on each unique one
//
// Returns: reports in the order links first appear in the document
pub fn scan_document(content: &str, kind: DocumentKind, site: &SiteContext) -> Vec<LinkReport> {
    let found = match kind {
        DocumentKind::Html => extract_html_links(content),
        DocumentKind::Markdown => extract_markdown_links(content),
    };
    debug!(?kind, links = found.len(), "extracted links");

    report_links(found, site)
}

// Removes duplicates (keeping first-seen order) and builds the reports
pub fn report_links(urls: Vec<String>, site: &SiteContext) -> Vec<LinkReport> {
    let mut seen = HashSet::new();

    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .map(|url| LinkReport::new(url, site))
        .collect()
}

// Checks if a link should be reported
//
// We skip:
// - empty hrefs
// - same-page fragments (#top)
// - mailto:, tel:, javascript: and data: links
fn is_reportable_link(url: &str) -> bool {
    const SKIPPED_SCHEMES: [&str; 4] = ["mailto:", "tel:", "javascript:", "data:"];

    if url.is_empty() || url.starts_with('#') {
        return false;
    }

    let lower = url.to_ascii_lowercase();
    !SKIPPED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashSet::insert inside filter?
//    - insert() returns true only the first time a value is added
//    - So the filter keeps the first occurrence and drops repeats
//    - Unlike collecting into a HashSet, this keeps document order
//
// 2. Why does LinkReport own its url (String instead of &str)?
//    - The report outlives the document text it came from
//    - It gets serialized to JSON after the document is dropped
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContext {
        SiteContext::from_home_url("https://www.mind.ch")
    }

    #[test]
    fn test_reportable_links() {
        assert!(is_reportable_link("https://example.org"));
        assert!(is_reportable_link("/about"));
        assert!(!is_reportable_link(""));
        assert!(!is_reportable_link("#top"));
        assert!(!is_reportable_link("MAILTO:x@example.org"));
        assert!(!is_reportable_link("tel:+41000000"));
    }

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension(Some("MD")), DocumentKind::Markdown);
        assert_eq!(DocumentKind::from_extension(Some("markdown")), DocumentKind::Markdown);
        assert_eq!(DocumentKind::from_extension(Some("html")), DocumentKind::Html);
        assert_eq!(DocumentKind::from_extension(None), DocumentKind::Html);
    }

    #[test]
    fn test_scan_html_document() {
        let html = r#"
            <a href="https://www.mind.ch/blog">Blog</a>
            <a href="https://www.example.org/x">Partner</a>
            <a href="https://www.mind.ch/blog">Blog again</a>
        "#;
        let reports = scan_document(html, DocumentKind::Html, &site());

        assert_eq!(reports.len(), 2);
        assert_eq!(
            reports[0],
            LinkReport {
                url: "https://www.mind.ch/blog".to_string(),
                external: false,
                attributes: r#"href="https://www.mind.ch/blog""#.to_string(),
                domain: "mind.ch".to_string(),
            }
        );
        assert!(reports[1].external);
        assert_eq!(reports[1].domain, "example.org");
        assert!(reports[1].attributes.ends_with(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_scan_markdown_document() {
        let markdown = "[Team](/team) and [Partner](https://example.org)";
        let reports = scan_document(markdown, DocumentKind::Markdown, &site());

        assert_eq!(reports.len(), 2);
        assert!(!reports[0].external);
        assert_eq!(reports[0].domain, "/team");
        assert!(reports[1].external);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = LinkReport::new("/team".to_string(), &site());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["external"], serde_json::json!(false));
        assert_eq!(json["attributes"], serde_json::json!(r#"href="/team""#));
    }
}
