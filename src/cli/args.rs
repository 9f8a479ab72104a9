//! CLI argument definitions and parsing structures.

use super::types::{
    filters::{DateRange, Deleted, Mode, Qsl},
    ids::ClubId,
};
use crate::DEFAULT_CSV_PATH;
use clap::{Args, Parser};
use std::path::PathBuf;

/// League filters sent to Club Log
#[derive(Debug, Clone, Args)]
pub struct LeagueFilters {
    /// Filter by mode.
    #[clap(short, long, default_value_t = Mode::default())]
    pub mode: Mode,

    /// Filter by worked or confirmed status.
    #[clap(short, long, default_value_t = Qsl::default())]
    pub qsl: Qsl,

    /// Filter by date.
    #[clap(short, long, default_value_t = DateRange::default())]
    pub date: DateRange,

    /// Filter by club, defaults to the global list. Must be the ID number of
    /// the desired club, as shown in the club's Club Log league URL.
    #[clap(short, long, value_name = "ID", default_value_t = ClubId::GLOBAL)]
    pub club: ClubId,

    /// Filter by inclusion of deleted entities.
    #[clap(short = 'D', long, default_value_t = Deleted::default())]
    pub deleted: Deleted,
}

#[derive(Debug, Parser)]
#[clap(
    name = "clublog-league",
    version,
    about = "Request the DXCC league table from Club Log and save it as CSV"
)]
pub struct ClubLog {
    /// The path to write the CSV file to.
    #[clap(
        short = 'o',
        long = "csv_file",
        value_name = "PATH",
        default_value = DEFAULT_CSV_PATH
    )]
    pub csv_file: PathBuf,

    #[clap(flatten)]
    pub filters: LeagueFilters,

    /// Remove the specified calls from the results.
    #[clap(short, long, value_name = "CALL", num_args = 1..)]
    pub exclude: Vec<String>,
}
