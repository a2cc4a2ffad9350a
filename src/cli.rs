// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every URL helper gets its own subcommand so it can be tried from a
// shell, plus `call` to go through the template function registry exactly
// like a templating engine would, and `scan` to run the helpers over all
// links of a page.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-helpers",
    version,
    about = "URL helpers for site templates: external links, display domains, anchor links",
    long_about = "link-helpers runs the URL helpers used by site templates: it classifies links as \
                  internal or external, builds <a> attributes with rel=\"noopener noreferrer\" \
                  for external links, shortens URLs to display domains and builds one-pager anchor links."
)]
pub struct Cli {
    /// Home URL of the site; links to other hosts are external
    ///
    /// Overrides `site.home_url` from link-helpers.toml
    #[arg(long, global = true, env = "LINK_HELPERS_HOME_URL")]
    pub home_url: Option<String>,

    /// Path to the config file (default: search link-helpers.toml upward)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a URL points to another site
    ///
    /// Example: link-helpers --home-url https://www.mind.ch external https://example.org
    External {
        /// URL to classify
        url: String,
    },

    /// Print the <a> attributes for a URL
    ///
    /// Prints nothing and exits with code 1 for an empty URL
    Attrs {
        /// URL the link points to
        url: String,
    },

    /// Shorten a URL to its domain
    ///
    /// Example: link-helpers domain https://www.mind.ch/post --strip-www
    Domain {
        /// URL to shorten
        url: String,

        /// Drop a leading "www."
        #[arg(long)]
        strip_www: bool,

        /// Maximum length; longer domains end in "..."
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Turn the last path segment of a URL into an #anchor
    ///
    /// Example: link-helpers anchor https://www.mind.ch/onepager/subsection
    Anchor {
        /// URL to convert
        url: String,
    },

    /// Call a template function by name
    ///
    /// Arguments are read as JSON when they parse (true, 20, null),
    /// otherwise as plain strings.
    /// Example: link-helpers call url_to_domain https://www.mind.ch true 20
    Call {
        /// Registered function name
        name: String,

        /// Positional arguments
        args: Vec<String>,
    },

    /// List the registered template functions
    Functions,

    /// Report what the helpers make of every link in a document
    ///
    /// Example: link-helpers scan public/index.html
    Scan {
        /// HTML or Markdown file
        file: PathBuf,

        /// Treat the file as Markdown regardless of its extension
        #[arg(long)]
        markdown: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_domain_command() {
        let cli = Cli::parse_from([
            "link-helpers",
            "domain",
            "https://www.mind.ch",
            "--strip-www",
            "--limit",
            "8",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Domain {
                url,
                strip_www,
                limit,
            } => {
                assert_eq!(url, "https://www.mind.ch");
                assert!(strip_www);
                assert_eq!(limit, Some(8));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_call_arguments() {
        let cli = Cli::parse_from([
            "link-helpers",
            "--home-url",
            "https://site.test",
            "call",
            "url_to_domain",
            "https://www.site.test",
            "true",
        ]);
        assert_eq!(cli.home_url.as_deref(), Some("https://site.test"));
        match cli.command {
            Commands::Call { name, args } => {
                assert_eq!(name, "url_to_domain");
                assert_eq!(args, vec!["https://www.site.test", "true"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
