use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// stdout carries command output (possibly JSON), so logs never go there.
/// The level comes from `RUST_LOG` and defaults to warnings only.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {}", err))?;

    tracing::debug!("logging initialized");

    Ok(())
}
