//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout carries only the reset report.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3+ (`-vvv`): trace
//!
//! `RUST_LOG` overrides the verbosity flag when set.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
pub fn init_logging(verbosity: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("requeue={}", level.as_str().to_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(3), Level::TRACE);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_logging(0);

        let err = init_logging(1).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
