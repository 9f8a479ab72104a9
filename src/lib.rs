//! Club Log DXCC League Exporter
//!
//! Downloads the DXCC league table from [Club Log](https://clublog.org),
//! removes unwanted calls, closes the rank gaps they leave and saves the
//! table as CSV.
//!
//! ## Features
//!
//! - **League Filters**: Mode, QSL status, date window, club and deleted entities
//! - **Response Repair**: Club Log's concatenated JSON arrays are patched before decoding
//! - **Re-ranking**: Excluded calls leave no holes in the rank column
//! - **Atomic Output**: The CSV either appears complete or not at all
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clublog_league::{commands::league::*, clublog::LeagueRequest, Mode};
//!
//! # async fn example() -> clublog_league::Result<()> {
//! let params = LeagueParams {
//!     request: LeagueRequest { mode: Mode::CW, ..LeagueRequest::default() },
//!     exclude: ["G0ABC"].into_iter().collect(),
//!     csv_path: "league.csv".into(),
//!     base_url: None,
//!     timeout: clublog_league::core::REQUEST_TIMEOUT,
//! };
//!
//! handle_league(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the exporter at another league endpoint, such as a mirror:
//! ```bash
//! export CLUBLOG_LEAGUE_URL=https://mirror.example.org/league_api.php
//! ```

pub mod cli;
pub mod clublog;
pub mod commands;
pub mod core;
pub mod error;
pub mod telemetry;

// Re-export commonly used types
pub use cli::types::{ClubId, DateRange, Deleted, Mode, Qsl};
pub use error::{LeagueError, Result};

pub const LEAGUE_URL_ENV_VAR: &str = "CLUBLOG_LEAGUE_URL";

pub const DEFAULT_CSV_PATH: &str = "./league.csv";
