#![forbid(unsafe_code)]

//! Log subscriber setup.
//!
//! The library crates only emit `tracing` events. Applications that do
//! not install their own subscriber can call [`init_from_env`].

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Variable read first for the filter directive.
pub const ENV_LOG: &str = "SLABEL_LOG";

/// Directive used when neither variable is set or valid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a `fmt` subscriber filtered by `SLABEL_LOG`, then `RUST_LOG`,
/// then [`DEFAULT_DIRECTIVE`].
///
/// Fails without touching the existing subscriber if one is already set.
pub fn init_from_env() -> crate::Result<()> {
    let filter = filter_with(|key| env::var(key).ok());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    tracing::debug!("styled-label logging initialized");
    Ok(())
}

/// Build the filter from a custom lookup (for tests).
pub fn filter_with<F>(get: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    [ENV_LOG, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .filter_map(|key| get(key))
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn prefers_crate_variable() {
        let filter = filter_with(lookup(&[(ENV_LOG, "debug"), ("RUST_LOG", "error")]));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let filter = filter_with(lookup(&[("RUST_LOG", "styled_label_text=trace")]));
        assert_eq!(filter.to_string(), "styled_label_text=trace");
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(filter_with(lookup(&[])).to_string(), "warn");
    }

    #[test]
    fn skips_invalid_directive() {
        let filter = filter_with(lookup(&[(ENV_LOG, "styled_label=loud"), ("RUST_LOG", "info")]));
        assert_eq!(filter.to_string(), "info");
    }
}
