use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,movie_cli=info",
        _ => "debug,movie_cli=debug",
    }
}

/// Initialize diagnostic logging on stderr so stdout stays clean for the
/// movie summary. `RUST_LOG` wins over the `-v` count when set.
pub fn init_logging(verbose: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}
