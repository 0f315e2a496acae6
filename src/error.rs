//! Error types for scoreboard operations.

use std::fmt;

use thiserror::Error;

/// Which side of a match a team plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Away,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => write!(f, "home"),
            TeamSide::Away => write!(f, "away"),
        }
    }
}

/// Errors returned by [`Scoreboard`](crate::Scoreboard) operations.
///
/// Every failure is surfaced immediately; a failed operation never leaves
/// partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("home team and away team must be non-empty strings")]
    EmptyTeamName,

    #[error("{side} team {name:?} is already in a match")]
    TeamBusy { side: TeamSide, name: String },

    #[error("scores must be integers greater than or equal to 0")]
    InvalidScore,

    #[error("match {0:?} not found")]
    MatchNotFound(String),

    #[error("match {0:?} has already ended")]
    MatchAlreadyEnded(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_busy_message_names_side() {
        let home = ScoreboardError::TeamBusy {
            side: TeamSide::Home,
            name: "Spain".to_string(),
        };
        let away = ScoreboardError::TeamBusy {
            side: TeamSide::Away,
            name: "Brazil".to_string(),
        };

        assert_eq!(home.to_string(), "home team \"Spain\" is already in a match");
        assert_eq!(away.to_string(), "away team \"Brazil\" is already in a match");
    }

    #[test]
    fn test_lookup_errors_carry_id() {
        let err = ScoreboardError::MatchNotFound("123-A-B".to_string());
        assert!(err.to_string().contains("123-A-B"));

        let err = ScoreboardError::MatchAlreadyEnded("123-A-B".to_string());
        assert!(err.to_string().contains("123-A-B"));
    }
}
