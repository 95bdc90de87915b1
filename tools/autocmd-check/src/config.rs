//! Checker configuration.
//!
//! Everything here comes from the environment; command-line flags override it.

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Default editor binary, resolved through `PATH`.
const DEFAULT_NVIM: &str = "nvim";

/// Checker configuration (env-driven).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Neovim binary used for the live probe.
    pub nvim: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON instead of compact text.
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let nvim = match var("AUTOCMD_CHECK_NVIM") {
            Some(value) if value.trim().is_empty() => {
                bail!("AUTOCMD_CHECK_NVIM is set but empty.")
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_NVIM),
        };

        let log_level = var("AUTOCMD_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_json = var("AUTOCMD_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            nvim,
            log_level,
            log_json,
        })
    }
}
