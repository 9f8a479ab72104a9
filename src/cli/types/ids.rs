//! ID types for Club Log.

use crate::error::{LeagueError, Result};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Club Log club IDs.
///
/// The club ID restricts the league to members of one club. ID 0 is
/// reserved for the global league covering every Club Log user.
///
/// # Examples
///
/// ```rust
/// use clublog_league::ClubId;
///
/// let club = ClubId::new(42);
/// assert_eq!(club.as_u32(), 42);
/// assert!(!club.is_global());
/// assert!(ClubId::default().is_global());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClubId(pub u32);

impl ClubId {
    /// The global league.
    pub const GLOBAL: ClubId = ClubId(0);

    /// Create a new ClubId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn is_global(&self) -> bool {
        *self == Self::GLOBAL
    }
}

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClubId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_id_from_str_valid() {
        let id = ClubId::from_str("1234").unwrap();
        assert_eq!(id.as_u32(), 1234);
        assert_eq!(id.to_string(), "1234");
    }

    #[test]
    fn test_club_id_from_str_zero_is_global() {
        let id = ClubId::from_str("0").unwrap();
        assert!(id.is_global());
        assert_eq!(id, ClubId::GLOBAL);
    }

    #[test]
    fn test_club_id_from_str_negative() {
        match ClubId::from_str("-1").unwrap_err() {
            LeagueError::InvalidClubId(_) => (),
            _ => panic!("Expected InvalidClubId error"),
        }
    }

    #[test]
    fn test_club_id_from_str_invalid() {
        assert!(ClubId::from_str("club").is_err());
    }
}
