//! League filter types accepted on the command line.
//!
//! Each filter is a closed set of values with three spellings:
//!
//! - a canonical token used on the command line (`CW`, `Past12`, ...),
//! - a human-readable name for logs and help output,
//! - the integer code Club Log expects in the query string.

use crate::error::{LeagueError, Result};
use std::fmt;
use std::str::FromStr;


/// A filter value that is sent to Club Log as an integer code.
pub trait QueryCode {
    /// The integer code used in the league query string.
    fn code(&self) -> u8;
}

/// Transmission mode filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    /// Every mode combined
    #[default]
    #[value(name = "All")]
    All,
    #[value(name = "CW")]
    CW,
    #[value(name = "Phone")]
    Phone,
    #[value(name = "Data")]
    Data,
}

impl Mode {
    pub fn description(&self) -> &'static str {
        match self {
            Mode::All => "all modes",
            Mode::CW => "CW",
            Mode::Phone => "phone",
            Mode::Data => "data modes",
        }
    }
}

impl QueryCode for Mode {
    fn code(&self) -> u8 {
        match self {
            Mode::All => 0,
            Mode::CW => 1,
            Mode::Phone => 2,
            Mode::Data => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::All => "All",
            Mode::CW => "CW",
            Mode::Phone => "Phone",
            Mode::Data => "Data",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Mode {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "All" => Ok(Mode::All),
            "CW" => Ok(Mode::CW),
            "Phone" => Ok(Mode::Phone),
            "Data" => Ok(Mode::Data),
            _ => Err(LeagueError::InvalidToken {
                kind: "Mode",
                token: s.to_string(),
            }),
        }
    }
}

/// Whether a slot only needs to be worked or must be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Qsl {
    #[default]
    #[value(name = "Worked")]
    Worked,
    #[value(name = "Confirmed")]
    Confirmed,
}

impl Qsl {
    pub fn description(&self) -> &'static str {
        match self {
            Qsl::Worked => "worked",
            Qsl::Confirmed => "confirmed",
        }
    }
}

impl QueryCode for Qsl {
    fn code(&self) -> u8 {
        match self {
            Qsl::Worked => 0,
            Qsl::Confirmed => 1,
        }
    }
}

impl fmt::Display for Qsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Qsl::Worked => "Worked",
            Qsl::Confirmed => "Confirmed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Qsl {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Worked" => Ok(Qsl::Worked),
            "Confirmed" => Ok(Qsl::Confirmed),
            _ => Err(LeagueError::InvalidToken {
                kind: "Qsl",
                token: s.to_string(),
            }),
        }
    }
}

/// Date window applied to the contacts counted in the league.
///
/// Club Log reserves code 2, which has no meaning, so there is no variant for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum DateRange {
    /// No date filter
    #[default]
    #[value(name = "All")]
    All,
    /// The twelve months up to today
    #[value(name = "Past12")]
    Past12,
    /// The current calendar year
    #[value(name = "CurrentYear")]
    CurrentYear,
    /// The previous calendar year
    #[value(name = "LastYear")]
    LastYear,
}

impl DateRange {
    pub fn description(&self) -> &'static str {
        match self {
            DateRange::All => "all time",
            DateRange::Past12 => "past 12 months",
            DateRange::CurrentYear => "current year",
            DateRange::LastYear => "last year",
        }
    }
}

impl QueryCode for DateRange {
    fn code(&self) -> u8 {
        match self {
            DateRange::All => 0,
            DateRange::Past12 => 1,
            DateRange::CurrentYear => 3,
            DateRange::LastYear => 4,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateRange::All => "All",
            DateRange::Past12 => "Past12",
            DateRange::CurrentYear => "CurrentYear",
            DateRange::LastYear => "LastYear",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DateRange {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "All" => Ok(DateRange::All),
            "Past12" => Ok(DateRange::Past12),
            "CurrentYear" => Ok(DateRange::CurrentYear),
            "LastYear" => Ok(DateRange::LastYear),
            _ => Err(LeagueError::InvalidToken {
                kind: "Date",
                token: s.to_string(),
            }),
        }
    }
}

/// Whether contacts with deleted DXCC entities are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Deleted {
    /// Current entities only
    #[default]
    #[value(name = "Current")]
    Current,
    /// Current and deleted entities
    #[value(name = "All")]
    All,
}

impl Deleted {
    pub fn description(&self) -> &'static str {
        match self {
            Deleted::Current => "current entities",
            Deleted::All => "current and deleted entities",
        }
    }
}

impl QueryCode for Deleted {
    fn code(&self) -> u8 {
        match self {
            Deleted::Current => 0,
            Deleted::All => 1,
        }
    }
}

impl fmt::Display for Deleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Deleted::Current => "Current",
            Deleted::All => "All",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Deleted {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Current" => Ok(Deleted::Current),
            "All" => Ok(Deleted::All),
            _ => Err(LeagueError::InvalidToken {
                kind: "Deleted",
                token: s.to_string(),
            }),
        }
    }
}
