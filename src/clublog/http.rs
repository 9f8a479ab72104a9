//! League download from Club Log.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{repair::parse_league, request::LeagueRequest, types::RawRow};
use crate::{LeagueError, Result};


/// Fetch the league matching `request` and decode its rows.
///
/// Anything other than `200 OK` is reported as a remote failure with the
/// status and reason. A request still running after `timeout` fails with
/// [`LeagueError::Timeout`]. Nothing is retried.
pub async fn get_league(
    client: &Client,
    base_url: &str,
    request: &LeagueRequest,
    timeout: Duration,
) -> Result<Vec<RawRow>> {
    let url = request.url(base_url);
    let club = if request.club.is_global() {
        "global".to_string()
    } else {
        request.club.to_string()
    };
    tracing::info!(
        %url,
        mode = request.mode.description(),
        qsl = request.qsl.description(),
        date = request.date.description(),
        deleted = request.deleted.description(),
        %club,
        "requesting league"
    );

    let transport_error = |err: reqwest::Error| {
        if err.is_timeout() {
            LeagueError::Timeout {
                seconds: timeout.as_secs(),
            }
        } else {
            LeagueError::Http(err)
        }
    };

    let response = client
        .get(&url)
        .timeout(timeout)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        // The body is best effort; the status alone is enough to fail
        let body = response.text().await.unwrap_or_default();
        return Err(LeagueError::Remote {
            status: status.as_u16(),
            message: remote_message(status, &body),
        });
    }

    let body = response.text().await.map_err(transport_error)?;
    tracing::debug!(bytes = body.len(), "league body received");

    let rows = parse_league(&body)?;
    tracing::info!(rows = rows.len(), "league decoded");

    Ok(rows)
}

/// Longest excerpt of an error body carried into [`LeagueError::Remote`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Reason phrase, followed by what the server said when it said anything.
fn remote_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let body = body.trim();
    if body.is_empty() {
        return reason.to_string();
    }

    let mut excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if excerpt.len() < body.len() {
        excerpt.push_str("...");
    }
    format!("{reason}: {excerpt}")
}
