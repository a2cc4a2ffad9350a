// src/links/attributes.rs
// =============================================================================
// Builds the attributes of an <a> tag for a URL.
//
// Usage in a template:
//   <a {{ get_link_attributes(post.link) }}>Read more</a>
//
// External links open in a new tab. A page opened with target="_blank"
// can reach back to our page through `window.opener` and navigate it
// somewhere else, so external links also get rel="noopener noreferrer".
// See https://mathiasbynens.github.io/rel-noopener/
// =============================================================================

use std::borrow::Cow;

use super::classify::is_external_url;
use super::site::SiteContext;

pub const EXTERNAL_LINK_TARGET: &str = "_blank";
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

// Returns the href (plus target/rel for external links) attribute string
//
// Returns: None for empty input, so templates can skip the link entirely
//
// Examples (site = https://site.test):
//   "https://site.test/page" -> href="https://site.test/page"
//   "https://example.org/x"  -> href="https://example.org/x" target="_blank" rel="noopener noreferrer"
//   ""                       -> None
pub fn get_link_attributes(url: &str, site: &SiteContext) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let href = escape_attribute_value(url);

    if is_external_url(url, site) {
        Some(format!(
            r#"href="{}" target="{}" rel="{}""#,
            href, EXTERNAL_LINK_TARGET, EXTERNAL_LINK_REL
        ))
    } else {
        Some(format!(r#"href="{}""#, href))
    }
}

// A raw quote would end the attribute value early
fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}
