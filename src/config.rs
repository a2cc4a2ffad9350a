//! Site configuration from `link-helpers.toml`.
//!
//! ```toml
//! [site]
//! home_url = "https://www.mind.ch"
//! ```
//!
//! The file is looked up from the working directory upward. A home URL
//! given on the command line (or through `LINK_HELPERS_HOME_URL`) wins
//! over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::links::{parse_host, SiteContext};

pub const CONFIG_FILE_NAME: &str = "link-helpers.toml";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpersConfig {
    #[serde(default)]
    pub site: SiteSection,
}

/// `[site]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Canonical URL of the site; its host decides what counts as internal.
    pub home_url: Option<String>,
}

impl HelpersConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&content)
    }

    /// Loads `explicit` if given, otherwise searches upward from `start_dir`.
    ///
    /// Finding no file is fine and yields the default (empty) config. An
    /// explicit path that cannot be read is an error.
    pub fn discover(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match find_config_file(start_dir) {
            Some(path) => Self::load(&path),
            None => {
                debug!(start = %start_dir.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    pub fn with_home_url(mut self, home_url: Option<String>) -> Self {
        if home_url.is_some() {
            self.site.home_url = home_url;
        }
        self
    }

    /// Validates the config and builds the context the helpers compare against.
    pub fn site_context(&self) -> Result<SiteContext, ConfigError> {
        match self.site.home_url.as_deref() {
            None => Ok(SiteContext::hostless()),
            Some(home_url) if parse_host(home_url).is_none() => Err(ConfigError::Validation(
                format!("site.home_url `{}` has no host", home_url),
            )),
            Some(home_url) => Ok(SiteContext::from_home_url(home_url)),
        }
    }
}

/// Walks up from `start_dir` looking for [`CONFIG_FILE_NAME`].
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
