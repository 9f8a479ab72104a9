//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{ClubLog, LeagueFilters};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use super::types::{ClubId, DateRange, Deleted, Mode, Qsl};

    #[test]
    fn test_defaults() {
        let app = ClubLog::try_parse_from(["clublog-league"]).unwrap();

        assert_eq!(app.csv_file, PathBuf::from("./league.csv"));
        assert_eq!(app.filters.mode, Mode::All);
        assert_eq!(app.filters.qsl, Qsl::Worked);
        assert_eq!(app.filters.date, DateRange::All);
        assert_eq!(app.filters.club, ClubId::GLOBAL);
        assert_eq!(app.filters.deleted, Deleted::Current);
        assert!(app.exclude.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let app = ClubLog::try_parse_from([
            "clublog-league",
            "-o",
            "/tmp/out.csv",
            "-m",
            "CW",
            "-q",
            "Confirmed",
            "-d",
            "Past12",
            "-c",
            "42",
            "-D",
            "All",
        ])
        .unwrap();

        assert_eq!(app.csv_file, PathBuf::from("/tmp/out.csv"));
        assert_eq!(app.filters.mode, Mode::CW);
        assert_eq!(app.filters.qsl, Qsl::Confirmed);
        assert_eq!(app.filters.date, DateRange::Past12);
        assert_eq!(app.filters.club, ClubId::new(42));
        assert_eq!(app.filters.deleted, Deleted::All);
    }

    #[test]
    fn test_long_flags() {
        let app = ClubLog::try_parse_from([
            "clublog-league",
            "--csv_file",
            "table.csv",
            "--mode",
            "Data",
            "--date",
            "LastYear",
            "--club",
            "7",
            "--deleted",
            "Current",
        ])
        .unwrap();

        assert_eq!(app.csv_file, PathBuf::from("table.csv"));
        assert_eq!(app.filters.mode, Mode::Data);
        assert_eq!(app.filters.date, DateRange::LastYear);
        assert_eq!(app.filters.club.as_u32(), 7);
    }

    #[test]
    fn test_exclude_takes_many_calls() {
        let app =
            ClubLog::try_parse_from(["clublog-league", "-e", "G0ABC", "M0XYZ", "-m", "Phone"])
                .unwrap();

        assert_eq!(app.exclude, vec!["G0ABC".to_string(), "M0XYZ".to_string()]);
        assert_eq!(app.filters.mode, Mode::Phone);
    }

    #[test]
    fn test_exclude_requires_a_value() {
        assert!(ClubLog::try_parse_from(["clublog-league", "--exclude"]).is_err());
    }

    #[test]
    fn test_invalid_enum_token_is_usage_error() {
        let err = ClubLog::try_parse_from(["clublog-league", "-m", "SSB"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_negative_club_rejected() {
        assert!(ClubLog::try_parse_from(["clublog-league", "-c", "-3"]).is_err());
    }

    #[test]
    fn test_command_debug_assert() {
        use clap::CommandFactory;
        ClubLog::command().debug_assert();
    }
}
