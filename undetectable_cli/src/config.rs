//! Client configuration from the environment (and an optional `.env` file).

use anyhow::{bail, Result};
use undetectable_api::Config;

pub const API_KEY_VAR: &str = "UNDETECTABLE_API_KEY";
pub const DETECTOR_URL_VAR: &str = "UNDETECTABLE_DETECTOR_URL";
pub const HUMANIZER_URL_VAR: &str = "UNDETECTABLE_HUMANIZER_URL";

/// Reads `.env` if present, then builds a [`Config`] from the process environment.
pub fn load() -> Result<Config> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
        }
    }
    from_lookup(|name| std::env::var(name).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let api_key = match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => bail!(
            "{} is not set. Export it or add it to a .env file in the current directory.",
            API_KEY_VAR
        ),
    };

    let mut config = Config::new(api_key);
    if let Some(url) = lookup(DETECTOR_URL_VAR).filter(|u| !u.is_empty()) {
        tracing::debug!("Using detector base URL {}", url);
        config = config.with_detector_base_url(&url);
    }
    if let Some(url) = lookup(HUMANIZER_URL_VAR).filter(|u| !u.is_empty()) {
        tracing::debug!("Using humanizer base URL {}", url);
        config = config.with_humanizer_base_url(&url);
    }
    Ok(config)
}
