// src/links/host.rs
// =============================================================================
// Host extraction shared by every helper.
//
// We use the `url` crate, which follows the WHATWG URL standard:
// - hosts of http/https URLs are lowercased and IDNA-encoded
// - ports, userinfo, paths, queries and fragments are not part of the host
// - relative input ("/about", "page.html", "www.example.org/x") fails to
//   parse because there is no base to resolve it against
// =============================================================================

use tracing::trace;
use url::Url;

// Extracts the host of a URL, if it has one
//
// Returns: Some(host) for absolute and protocol-relative URLs with a
// non-empty host, None for everything else (relative paths, fragments,
// mailto:, unparseable input)
//
// Examples:
//   "https://www.mind.ch/post?x=1" -> Some("www.mind.ch")
//   "//cdn.example.org/app.js"      -> Some("cdn.example.org")
//   "/about"                        -> None
//   "mailto:hello@example.org"      -> None
pub fn parse_host(url: &str) -> Option<String> {
    // "//host/path" borrows the scheme of the page it appears on.
    // Any special scheme gives us the same host parsing rules.
    let parsed = if url.starts_with("//") {
        Url::parse(&format!("https:{}", url))
    } else {
        Url::parse(url)
    };

    match parsed {
        Ok(parsed) => parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .map(str::to_string),
        Err(error) => {
            trace!(url, %error, "url has no parseable host");
            None
        }
    }
}

// Returns the host exactly as it is written in the URL
//
// parse_host normalizes (lowercase, punycode, percent-decoding), which is
// right for comparing hosts but not for showing them to readers. This
// slices the host out of the input instead, and only when the parser
// agrees the URL has a host.
//
// Examples:
//   "https://www.zürich.ch/blog"       -> Some("www.zürich.ch")
//   "https://user@WWW.Mind.CH:8080/x" -> Some("WWW.Mind.CH")
//   "/about"                           -> None
pub fn host_as_written(url: &str) -> Option<&str> {
    parse_host(url)?;

    // The parser ignores leading/trailing spaces and control characters
    let url = url.trim_matches(|c: char| c <= ' ');
    let rest = match url.strip_prefix("//") {
        Some(rest) => rest,
        None => url.split_once(':')?.1,
    };

    // Special schemes accept any run of slashes and backslashes here
    let rest = rest.trim_start_matches(AUTHORITY_START);
    let authority = &rest[..rest.find(AUTHORITY_END).unwrap_or(rest.len())];

    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port);
    let host = strip_port(host_port);

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

const AUTHORITY_START: &[char] = &['/', '\\'];
const AUTHORITY_END: &[char] = &['/', '\\', '?', '#'];

fn strip_port(host_port: &str) -> &str {
    // "[::1]:8080": the port comes after the closing bracket
    if host_port.starts_with('[') {
        return match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        };
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_port,
    }
}
