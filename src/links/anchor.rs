// src/links/anchor.rs
// =============================================================================
// Builds in-page anchor links for one-pager sites.
//
// A one-pager renders its sub pages as sections of a single page, so the
// link to a sub page becomes a #fragment on its parent:
//
//   https://www.mind.ch/onepager/subsection   -> https://www.mind.ch/onepager#subsection
//   https://www.mind.ch/onepager/subsection/  -> https://www.mind.ch/onepager#subsection
// =============================================================================

// Characters removed from the end of the result
const TRAILING: &[char] = &['/', '\\'];

// Turns the last path segment of a URL into an anchor
//
// The last segment is the run of non-slash characters right before a
// single trailing slash or the end of the string. If there is no such
// segment (the URL ends in "//", or the only candidate is the host) the
// URL comes back unchanged apart from trailing slashes.
pub fn make_anchor_link(url: &str) -> String {
    let body = url.strip_suffix('/').unwrap_or(url);

    let anchored = match split_last_segment(body) {
        Some((head, segment)) => format!("{}#{}", head, segment),
        None => body.to_string(),
    };

    anchored.trim_end_matches(TRAILING).to_string()
}

// Splits "a/b/c" into ("a/b", "c")
//
// A segment right under the root keeps the root slash: "/team" splits into
// ("/", "team") so the anchor lands on the home page, not the current page.
fn split_last_segment(body: &str) -> Option<(&str, &str)> {
    if body.is_empty() || body.ends_with('/') {
        return None;
    }

    match body.rfind('/') {
        None => Some(("", body)),
        Some(0) => Some(("/", &body[1..])),
        Some(idx) => {
            let head = &body[..idx];
            // "https://host": the candidate is the authority, not a path segment
            if head.ends_with('/') {
                return None;
            }
            Some((head, &body[idx + 1..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_becomes_anchor() {
        assert_eq!(
            make_anchor_link("https://www.mind.ch/onepager/subsection"),
            "https://www.mind.ch/onepager#subsection"
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            make_anchor_link("https://www.mind.ch/onepager/subsection/"),
            "https://www.mind.ch/onepager#subsection"
        );
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(make_anchor_link("/onepager/team"), "/onepager#team");
        assert_eq!(make_anchor_link("team"), "#team");
    }

    #[test]
    fn test_segment_under_root_keeps_root_slash() {
        assert_eq!(make_anchor_link("/team"), "/#team");
        assert_eq!(make_anchor_link("/team/"), "/#team");
    }

    #[test]
    fn test_host_only_url_is_left_alone() {
        assert_eq!(make_anchor_link("https://www.mind.ch/"), "https://www.mind.ch");
        assert_eq!(make_anchor_link("https://www.mind.ch"), "https://www.mind.ch");
    }

    #[test]
    fn test_double_trailing_slash_has_no_segment() {
        assert_eq!(make_anchor_link("https://www.mind.ch/a//"), "https://www.mind.ch/a");
    }

    #[test]
    fn test_trailing_backslash_is_trimmed() {
        assert_eq!(make_anchor_link("/onepager/team\\"), "/onepager#team");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(make_anchor_link(""), "");
        assert_eq!(make_anchor_link("/"), "");
    }
}
