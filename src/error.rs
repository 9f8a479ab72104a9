//! Error types for the Club Log league exporter

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Club Log returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Club Log did not respond within {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Club Log response is not a valid league table: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("The league is empty, nothing to write")]
    EmptyResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{token:?} is not a valid {kind}")]
    InvalidToken { kind: &'static str, token: String },

    #[error("Failed to parse club ID: {0}")]
    InvalidClubId(#[from] std::num::ParseIntError),
}

impl LeagueError {
    /// Whether the failure happened talking to the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            LeagueError::Remote { .. } | LeagueError::Timeout { .. } | LeagueError::Http(_)
        )
    }
}
