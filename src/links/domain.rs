// src/links/domain.rs
// =============================================================================
// Turns a URL into the short domain shown to readers.
//
//   https://www.mind.ch/post/blablabla?param=wow  ->  www.mind.ch
//                                     strip_www   ->  mind.ch
//                                     limit = 5   ->  mi...
//
// The host is shown as written in the URL: "www.zürich.ch" stays readable
// instead of becoming "xn--zrich-kva.ch". If the input has no host (e.g.
// "www.mind.ch/post" without a scheme) the raw input is used as the
// domain, so something is always displayed.
// =============================================================================

use super::host::host_as_written;

/// Marker appended to truncated domains.
pub const ELLIPSIS: &str = "...";

/// How [`url_to_domain`] shapes its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainOptions {
    /// Drop a leading `www.` label.
    pub strip_www: bool,
    /// Maximum length in characters. `None` and `Some(0)` mean unlimited.
    pub limit: Option<usize>,
}

impl DomainOptions {
    pub fn strip_www(mut self, strip_www: bool) -> Self {
        self.strip_www = strip_www;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// Converts a URL to just the domain name together with the TLD
//
// Truncated output is exactly `limit` characters long (for limit >= 3):
// limit - 3 characters of the domain followed by "...". Lengths count
// characters, not bytes, so a domain is never cut inside a code point.
pub fn url_to_domain(url: &str, options: DomainOptions) -> String {
    let mut host = host_as_written(url).unwrap_or(url).to_string();

    if options.strip_www && host.starts_with("www.") {
        host.drain(.."www.".len());
    }

    if let Some(limit) = options.limit.filter(|&limit| limit > 0) {
        if host.chars().count() > limit {
            let keep = limit.saturating_sub(ELLIPSIS.len());
            host = host.chars().take(keep).chain(ELLIPSIS.chars()).collect();
        }
    }

    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_www() {
        let options = DomainOptions::default().strip_www(true);
        assert_eq!(url_to_domain("https://www.mind.ch/post?x=1", options), "mind.ch");
    }

    #[test]
    fn test_keep_www() {
        let domain = url_to_domain("https://www.mind.ch/post", DomainOptions::default());
        assert_eq!(domain, "www.mind.ch");
    }

    #[test]
    fn test_only_leading_www_label_is_stripped() {
        let options = DomainOptions::default().strip_www(true);
        assert_eq!(url_to_domain("https://wwwx.example.org", options), "wwwx.example.org");
        assert_eq!(url_to_domain("https://cdn.www.example.org", options), "cdn.www.example.org");
    }

    #[test]
    fn test_limit_truncates_to_exact_length() {
        let options = DomainOptions::default().strip_www(true).limit(8);
        let domain = url_to_domain("https://www.example.org", options);
        assert_eq!(domain, "examp...");
        assert_eq!(domain.chars().count(), 8);
        assert!(domain.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_limit_not_reached() {
        let options = DomainOptions::default().limit(11);
        assert_eq!(url_to_domain("https://example.org", options), "example.org");
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let options = DomainOptions::default().limit(0);
        assert_eq!(url_to_domain("https://example.org", options), "example.org");
    }

    #[test]
    fn test_tiny_limit_keeps_only_the_marker() {
        let options = DomainOptions::default().limit(2);
        assert_eq!(url_to_domain("https://example.org", options), ELLIPSIS);
    }

    #[test]
    fn test_unparseable_url_falls_back_to_input() {
        let options = DomainOptions::default().strip_www(true);
        assert_eq!(url_to_domain("www.mind.ch/post", options), "mind.ch/post");
    }

    #[test]
    fn test_internationalized_domain_is_not_punycode() {
        let options = DomainOptions::default().strip_www(true);
        assert_eq!(url_to_domain("https://www.zürich.ch/blog", options), "zürich.ch");

        let limited = url_to_domain("https://www.zürich.ch/blog", options.limit(7));
        assert_eq!(limited, "züri...");
        assert_eq!(limited.chars().count(), 7);
    }

    #[test]
    fn test_host_case_is_kept() {
        let domain = url_to_domain("https://Blog.Mind.CH/x", DomainOptions::default());
        assert_eq!(domain, "Blog.Mind.CH");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let options = DomainOptions::default().limit(5);
        assert_eq!(url_to_domain("zürich-blog", options), "zü...");
    }
}
