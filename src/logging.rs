use crate::error::{LeadscopeError, Result};
use tracing_subscriber::EnvFilter;

/// Level implied by `-v`/`-q`, if any was given.
pub fn cli_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

/// `RUST_LOG` wins, then the command line, then the config file, then `warn`.
pub fn init(cli_level: Option<&str>, config_level: Option<&str>) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = cli_level.or(config_level).unwrap_or("warn");
            EnvFilter::try_new(level).map_err(|e| {
                LeadscopeError::ConfigParse(format!("invalid log level '{level}': {e}"))
            })?
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
    {
        tracing::debug!(error = %e, "subscriber already installed, keeping it");
    }
    Ok(())
}
