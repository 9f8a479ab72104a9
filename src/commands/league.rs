//! League export command implementation

use std::{path::PathBuf, time::Duration};

use crate::{
    cli::ClubLog,
    clublog::{get_league, process_league, ExclusionSet, LeagueRequest},
    core::{build_client, write_csv, REQUEST_TIMEOUT},
    Result,
};

use super::resolve_base_url;

/// Everything one export run needs.
#[derive(Debug, Clone)]
pub struct LeagueParams {
    pub request: LeagueRequest,
    pub exclude: ExclusionSet,
    pub csv_path: PathBuf,
    /// League endpoint; falls back to the environment, then Club Log.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl From<ClubLog> for LeagueParams {
    fn from(app: ClubLog) -> Self {
        Self {
            request: LeagueRequest::from(&app.filters),
            exclude: app.exclude.into_iter().collect(),
            csv_path: app.csv_file,
            base_url: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Download the league, drop excluded calls, re-rank and write the CSV.
///
/// Returns the number of rows written.
pub async fn handle_league(params: LeagueParams) -> Result<usize> {
    let base_url = resolve_base_url(params.base_url);
    let client = build_client()?;

    let rows = get_league(&client, &base_url, &params.request, params.timeout).await?;
    let league = process_league(&rows, &params.exclude);

    if !params.exclude.is_empty() {
        tracing::info!(
            requested = params.exclude.len(),
            removed = rows.len() - league.len(),
            "applied exclusions"
        );
    }

    write_csv(&league, &params.csv_path)?;
    Ok(league.len())
}
