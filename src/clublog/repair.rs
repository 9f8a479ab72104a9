//! Decoding of the league response body.
//!
//! Club Log sends the league as back-to-back JSON arrays with no separator
//! and no enclosing array, e.g. `[1,"A"][2,"B"]`. The body is patched into a
//! single JSON array before decoding.

use serde::de::DeserializeOwned;

use crate::{LeagueError, Result};

/// Separate adjacent arrays with a comma and wrap everything in one outer array.
///
/// The replacement is purely textual, so a `][` inside a string value is
/// rewritten as well.
pub fn repair_league_json(raw: &str) -> String {
    format!("[{}]", raw.replace("][", "],["))
}

/// Repair and decode a league body into its rows.
pub fn parse_league<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    let fixed = repair_league_json(raw);
    serde_json::from_str(&fixed).map_err(LeagueError::MalformedResponse)
}
