// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Initialize logging (stderr, controlled by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Resolve the site's home URL (flag/env, then link-helpers.toml)
// 4. Dispatch to the appropriate subcommand handler
// 5. Exit with proper code (0 = success, 1 = absent result, 2 = error)
// =============================================================================

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use serde::Serialize;
use serde_json::Value;

use link_helpers::cli::{Cli, Commands};
use link_helpers::config::HelpersConfig;
use link_helpers::logging;
use link_helpers::registry::{self, TemplateFunctions};
use link_helpers::scan::{self, DocumentKind, LinkReport};
use link_helpers::{links, DomainOptions, SiteContext};

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success
//   Ok(1) = the helper returned its absent value
//   Err   = bad input, config or I/O problem
fn run() -> Result<i32> {
    let cli = Cli::parse();
    let json = cli.json;

    // Functions doesn't need a site, but resolving it up front keeps
    // config errors visible for every command
    let site = resolve_site(&cli)?;

    match cli.command {
        Commands::External { url } => {
            print_value(&links::is_external_url(&url, &site), json)?;
            Ok(0)
        }
        Commands::Attrs { url } => match links::get_link_attributes(&url, &site) {
            Some(attributes) => {
                print_value(&attributes, json)?;
                Ok(0)
            }
            None => {
                if json {
                    println!("false");
                }
                Ok(1)
            }
        },
        Commands::Domain {
            url,
            strip_www,
            limit,
        } => {
            let options = DomainOptions { strip_www, limit };
            print_value(&links::url_to_domain(&url, options), json)?;
            Ok(0)
        }
        Commands::Anchor { url } => {
            print_value(&links::make_anchor_link(&url), json)?;
            Ok(0)
        }
        Commands::Call { name, args } => handle_call(&name, &args, &site, json),
        Commands::Functions => {
            let registry = TemplateFunctions::with_defaults();
            let names: Vec<_> = registry.names().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
            Ok(0)
        }
        Commands::Scan { file, markdown } => handle_scan(&file, markdown, &site, json),
    }
}

// Merges --home-url / LINK_HELPERS_HOME_URL with the config file
fn resolve_site(cli: &Cli) -> Result<SiteContext> {
    let cwd = std::env::current_dir().context("Could not determine the working directory")?;
    let config = HelpersConfig::discover(cli.config.as_deref(), &cwd)
        .context("Could not load configuration")?
        .with_home_url(cli.home_url.clone());

    let site = config.site_context()?;
    if site.home_host().is_none() {
        tracing::warn!("no site home URL configured; every absolute link counts as external");
    }
    Ok(site)
}

// Handles the 'call' subcommand
fn handle_call(name: &str, args: &[String], site: &SiteContext, json: bool) -> Result<i32> {
    let registry = TemplateFunctions::with_defaults();
    let args: Vec<Value> = args.iter().map(|arg| registry::parse_argument(arg)).collect();

    let result = registry
        .call(name, site, &args)
        .with_context(|| format!("Template function `{}` failed", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match &result {
            Value::String(text) => println!("{}", text),
            other => println!("{}", other),
        }
    }

    Ok(if result == Value::Bool(false) { 1 } else { 0 })
}

// Handles the 'scan' subcommand
fn handle_scan(file: &Path, markdown: bool, site: &SiteContext, json: bool) -> Result<i32> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;

    let kind = if markdown {
        DocumentKind::Markdown
    } else {
        DocumentKind::from_extension(file.extension().and_then(|ext| ext.to_str()))
    };

    let reports = scan::scan_document(&content, kind, site);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if reports.is_empty() {
        println!("No links found in {}", file.display());
    } else {
        print_table(&reports);
    }

    Ok(0)
}

// Prints a single helper result, as JSON or plain text
fn print_value<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

// Prints scan results as a human-readable table in the terminal
fn print_table(reports: &[LinkReport]) {
    println!("{:<50} {:<10} {:<30}", "URL", "LINK", "DOMAIN");
    println!("{}", "=".repeat(90));

    for report in reports {
        let kind = if report.external { "external" } else { "internal" };
        println!(
            "{:<50} {:<10} {:<30}",
            truncate_for_table(&report.url, 47),
            kind,
            report.domain
        );
    }

    println!();

    let external_count = reports.iter().filter(|r| r.external).count();
    println!("Summary:");
    println!("   Internal: {}", reports.len() - external_count);
    println!("   External: {}", external_count);
    println!("   Total:    {}", reports.len());
}

// Truncates on a char boundary so multi-byte URLs don't panic
fn truncate_for_table(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
