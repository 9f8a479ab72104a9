//! Command implementations for the Club Log league exporter

pub mod league;

use crate::{clublog::LEAGUE_API_URL, LEAGUE_URL_ENV_VAR};

/// Resolve the league endpoint from option, then environment variable, then the default.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(LEAGUE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| LEAGUE_API_URL.to_string())
}
