//! League request construction.

use crate::cli::{
    types::{ClubId, DateRange, Deleted, Mode, Qsl, QueryCode},
    LeagueFilters,
};

/// Club Log DXCC league endpoint.
///
/// See <https://clublog.freshdesk.com/support/solutions/articles/3000054404>.
pub const LEAGUE_API_URL: &str = "https://clublog.org/league_api.php";

/// Filters for a single league request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeagueRequest {
    pub mode: Mode,
    pub qsl: Qsl,
    pub date: DateRange,
    pub club: ClubId,
    pub deleted: Deleted,
}

impl LeagueRequest {
    pub fn new(mode: Mode, qsl: Qsl, date: DateRange, club: ClubId, deleted: Deleted) -> Self {
        Self {
            mode,
            qsl,
            date,
            club,
            deleted,
        }
    }

    /// Query parameters in the order Club Log documents them.
    pub fn query_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("mode", self.mode.code().to_string()),
            ("qsl", self.qsl.code().to_string()),
            ("date", self.date.code().to_string()),
            ("club", self.club.to_string()),
            ("deleted", self.deleted.code().to_string()),
        ]
    }

    /// `mode=..&qsl=..&date=..&club=..&deleted=..`
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full league URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url.trim_end_matches('?'), self.query_string())
    }
}

impl From<&LeagueFilters> for LeagueRequest {
    fn from(filters: &LeagueFilters) -> Self {
        Self::new(
            filters.mode,
            filters.qsl,
            filters.date,
            filters.club,
            filters.deleted,
        )
    }
}
