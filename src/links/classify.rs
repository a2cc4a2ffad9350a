// src/links/classify.rs
// =============================================================================
// Decides whether a link leaves the site.
//
// Two URLs point to the same site when their parsed hosts are equal.
// Comparison is exact on the parsed form, so "www.example.org" and
// "example.org" are different sites.
//
// Links without a host ("/about", "#top", "page.html") are internal: a
// browser resolves them against the current page, which lives on our site.
// =============================================================================

use super::host::parse_host;
use super::site::SiteContext;

// Returns true when the URL's host differs from the site's home host
//
// Examples (site = https://www.mind.ch):
//   "https://www.mind.ch/blog" -> false
//   "https://example.org"      -> true
//   "/contact"                 -> false
pub fn is_external_url(url: &str, site: &SiteContext) -> bool {
    match parse_host(url) {
        None => false,
        Some(host) => site.home_host() != Some(host.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContext {
        SiteContext::from_home_url("https://site.test")
    }

    #[test]
    fn test_same_host_is_internal() {
        assert!(!is_external_url("https://site.test/page", &site()));
        assert!(!is_external_url("http://site.test:8080/?q=1", &site()));
    }

    #[test]
    fn test_other_host_is_external() {
        assert!(is_external_url("https://example.org/x", &site()));
        assert!(is_external_url("https://www.site.test/", &site()));
        assert!(is_external_url("https://sub.site.test/", &site()));
    }

    #[test]
    fn test_hosts_compare_in_parsed_form() {
        // The parser lowercases and punycodes http(s) hosts before comparing
        assert!(!is_external_url("HTTPS://SITE.TEST/x", &site()));
        assert!(!is_external_url("https://Site.Test/x", &site()));

        let swiss = SiteContext::from_home_url("https://www.zürich.ch");
        assert!(!is_external_url("https://www.xn--zrich-kva.ch/blog", &swiss));
        assert!(!is_external_url("https://WWW.ZÜRICH.CH/blog", &swiss));
        assert!(is_external_url("https://www.zurich.ch/blog", &swiss));
    }

    #[test]
    fn test_hostless_links_are_internal() {
        assert!(!is_external_url("/about", &site()));
        assert!(!is_external_url("#section", &site()));
        assert!(!is_external_url("", &site()));
        assert!(!is_external_url("mailto:hello@site.test", &site()));
    }

    #[test]
    fn test_protocol_relative_link() {
        assert!(!is_external_url("//site.test/app.js", &site()));
        assert!(is_external_url("//cdn.example.org/app.js", &site()));
    }

    #[test]
    fn test_hostless_site_treats_absolute_links_as_external() {
        let site = SiteContext::hostless();
        assert!(is_external_url("https://site.test/page", &site));
        assert!(!is_external_url("/page", &site));
    }
}
