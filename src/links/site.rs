// src/links/site.rs
// =============================================================================
// The identity of the site the templates are rendered for.
//
// Classification needs to know which host is "us". Instead of reading a
// process-wide setting, callers build a SiteContext once (usually from the
// config file) and pass it to every helper that needs it.
// =============================================================================

use super::host::parse_host;

/// Read-only description of the hosting site.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    home_host: Option<String>,
}

impl SiteContext {
    /// Builds the context from the site's home URL (e.g. `https://www.mind.ch`).
    ///
    /// A home URL without a host leaves the context host-less; every
    /// absolute URL is then external.
    pub fn from_home_url(home_url: &str) -> Self {
        Self {
            home_host: parse_host(home_url),
        }
    }

    /// A context with no home host at all.
    pub fn hostless() -> Self {
        Self::default()
    }

    pub fn home_host(&self) -> Option<&str> {
        self.home_host.as_deref()
    }
}
