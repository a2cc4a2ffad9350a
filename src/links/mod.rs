// src/links/mod.rs
// =============================================================================
// This module contains the URL helpers exposed to site templates.
//
// Submodules:
// - host: Shared host extraction (the only place that parses URLs)
// - site: The site identity every classification compares against
// - classify: Internal vs. external links
// - domain: Display-friendly domain strings
// - anchor: Turns the last path segment into a #fragment
// - attributes: Builds the href/target/rel attribute string for <a> tags
//
// Every function here is pure: no I/O, no global state, never panics on
// any string input. Degenerate input produces degraded output instead.
// =============================================================================

mod anchor;
mod attributes;
mod classify;
mod domain;
mod host;
mod site;

// Re-export public items from submodules so callers can write
// `links::url_to_domain()` instead of `links::domain::url_to_domain()`
pub use anchor::make_anchor_link;
pub use attributes::{get_link_attributes, EXTERNAL_LINK_REL, EXTERNAL_LINK_TARGET};
pub use classify::is_external_url;
pub use domain::{url_to_domain, DomainOptions, ELLIPSIS};
pub use host::{host_as_written, parse_host};
pub use site::SiteContext;
