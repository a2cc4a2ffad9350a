// src/scan/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Is fast and memory-efficient (it's a streaming parser)
// =============================================================================

use pulldown_cmark::{Event, Parser, Tag};

use super::is_reportable_link;

// Extracts all link destinations from Markdown text
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org) and [us](/about)!"
//
// Example output:
//   vec!["https://www.rust-lang.org", "/about"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    Parser::new(markdown)
        .filter_map(|event| match event {
            // In pulldown-cmark 0.9, Link is Tag::Link(link_type, dest_url, title)
            Event::Start(Tag::Link(_link_type, dest_url, _title)) => Some(dest_url.to_string()),
            _ => None,
        })
        .filter(|url| is_reportable_link(url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_link() {
        let markdown = "Check out [Rust](https://www.rust-lang.org)!";
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_extract_multiple_links() {
        let markdown = r#"
# Resources

- [Rust](https://www.rust-lang.org)
- [Cargo](https://doc.rust-lang.org/cargo/)
- [About](/about)
        "#;
        let links = extract_markdown_links(markdown);
        assert_eq!(links.len(), 3);
        assert!(links.contains(&"/about".to_string()));
    }

    #[test]
    fn test_skip_mailto_links() {
        let markdown = "Email me at [email](mailto:test@example.com)";
        let links = extract_markdown_links(markdown);
        assert_eq!(links.len(), 0);
    }

    #[test]
    fn test_autolink() {
        let markdown = "See <https://example.org/x>";
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec!["https://example.org/x"]);
    }
}
