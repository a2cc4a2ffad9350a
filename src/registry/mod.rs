// src/registry/mod.rs
// =============================================================================
// The template function registry.
//
// Templating engines call helpers by name with positional arguments:
//
//   {% if is_external_url(partner.url) %} ... {% endif %}
//   <a {{ get_link_attributes(post.link) }}>...</a>
//   {{ url_to_domain(url, true, 20) }}
//
// The host application builds a TemplateFunctions map once at startup and
// hands it to its engine. Values crossing the boundary are JSON values,
// which covers everything a template can pass: strings, booleans, numbers
// and null.
// =============================================================================

mod functions;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::links::SiteContext;

/// A helper callable from templates.
pub type TemplateFunction = fn(&SiteContext, &[Value]) -> Result<Value, CallError>;

/// Why a template function call was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum CallError {
    #[error("unknown template function `{0}`")]
    UnknownFunction(String),

    #[error("`{name}` takes {min} to {max} argument(s), got {got}")]
    Arity {
        name: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("argument {position} of `{name}` must be {expected}, got {got}")]
    ArgumentType {
        name: &'static str,
        position: usize,
        expected: &'static str,
        got: String,
    },
}

/// Name → callable mapping handed to a templating engine.
#[derive(Clone, Default)]
pub struct TemplateFunctions {
    functions: BTreeMap<&'static str, TemplateFunction>,
}

impl fmt::Debug for TemplateFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl TemplateFunctions {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every URL helper.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("is_external_url", functions::is_external_url);
        registry.register("get_link_attributes", functions::get_link_attributes);
        registry.register("url_to_domain", functions::url_to_domain);
        registry.register("make_anchor_link", functions::make_anchor_link);
        registry
    }

    /// Adds a function, returning the one it replaced.
    pub fn register(
        &mut self,
        name: &'static str,
        function: TemplateFunction,
    ) -> Option<TemplateFunction> {
        self.functions.insert(name, function)
    }

    pub fn get(&self, name: &str) -> Option<TemplateFunction> {
        self.functions.get(name).copied()
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Calls the function registered under `name`.
    pub fn call(&self, name: &str, site: &SiteContext, args: &[Value]) -> Result<Value, CallError> {
        let function = self
            .get(name)
            .ok_or_else(|| CallError::UnknownFunction(name.to_string()))?;

        debug!(function = name, args = args.len(), "calling template function");
        function(site, args)
    }
}

/// Reads a command-line argument as a template value.
///
/// JSON literals (`true`, `20`, `null`, `"quoted"`) keep their type;
/// anything else, such as a bare URL, becomes a string.
pub fn parse_argument(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}
