//! Club Log DXCC league: request, download, decode and re-rank.

pub mod http;
pub mod league;
pub mod repair;
pub mod request;
pub mod types;

pub use http::get_league;
pub use league::{process_league, ExclusionSet};
pub use repair::{parse_league, repair_league_json};
pub use request::{LeagueRequest, LEAGUE_API_URL};
pub use types::{Band, BandCounts, ProcessedRow, RawRow};
