//! URL helpers for site templates.
//!
//! The helpers in [`links`] are pure functions over URL strings. A host
//! application builds a [`SiteContext`] from its home URL, then either calls
//! the helpers directly or hands [`TemplateFunctions::with_defaults`] to its
//! templating engine.
//!
//! ```
//! use link_helpers::{get_link_attributes, SiteContext};
//!
//! let site = SiteContext::from_home_url("https://www.mind.ch");
//! assert_eq!(
//!     get_link_attributes("https://www.mind.ch/blog", &site).as_deref(),
//!     Some(r#"href="https://www.mind.ch/blog""#)
//! );
//! ```

pub mod cli;
pub mod config;
pub mod links;
pub mod logging;
pub mod registry;
pub mod scan;

pub use links::{
    get_link_attributes, is_external_url, make_anchor_link, url_to_domain, DomainOptions,
    SiteContext,
};
pub use registry::{CallError, TemplateFunction, TemplateFunctions};
