//! Match record and read-only summary snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One contest between two named teams.
///
/// Records are created and mutated only through the
/// [`Scoreboard`](crate::Scoreboard) registry, which performs all validation;
/// the record itself just holds state and the two transitions that change it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    /// Derived from the start time (epoch milliseconds) and both team names,
    /// joined with `-`. Unique in practice; a team name containing `-` can
    /// make the id ambiguous when split, but lookups treat it opaquely.
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub start_time: DateTime<Utc>,
    /// `None` while the match is in progress; set exactly once on finish.
    pub end_time: Option<DateTime<Utc>>,
}

impl Match {
    /// Create a record with both scores at zero, starting at `start_time`.
    pub(crate) fn new(home_team: &str, away_team: &str, start_time: DateTime<Utc>) -> Self {
        let id = format!(
            "{}-{}-{}",
            start_time.timestamp_millis(),
            home_team,
            away_team
        );
        Self {
            id,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
            start_time,
            end_time: None,
        }
    }

    /// Overwrite both scores. Validation is the registry's job.
    pub(crate) fn update_score(&mut self, home: u16, away: u16) {
        self.home_score = home;
        self.away_score = away;
    }

    /// Mark the match as ended at `at` and return the end time.
    ///
    /// Calling this twice would overwrite the end time; the registry rejects
    /// operations on ended matches before ever reaching this point.
    pub(crate) fn end(&mut self, at: DateTime<Utc>) -> DateTime<Utc> {
        self.end_time = Some(at);
        at
    }

    /// Combined score of both teams.
    pub fn total_score(&self) -> u32 {
        self.home_score as u32 + self.away_score as u32
    }

    /// Whether the match has ended.
    pub fn has_ended(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Read-only snapshot of a match, as returned by
/// [`Scoreboard::match_summary`](crate::Scoreboard::match_summary).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub has_ended: bool,
}

impl From<&Match> for MatchSummary {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
            start_time: m.start_time,
            end_time: m.end_time,
            has_ended: m.has_ended(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_new_match_starts_at_zero_zero() {
        let m = Match::new("Mexico", "Canada", start_time());

        assert_eq!(m.home_team, "Mexico");
        assert_eq!(m.away_team, "Canada");
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
        assert_eq!(m.start_time, start_time());
        assert!(m.end_time.is_none());
        assert!(!m.has_ended());
    }

    #[test]
    fn test_id_derivation() {
        let at = start_time();
        let m = Match::new("Mexico", "Canada", at);
        assert_eq!(m.id, format!("{}-Mexico-Canada", at.timestamp_millis()));
    }

    #[test]
    fn test_update_score_overwrites() {
        let mut m = Match::new("Spain", "Brazil", start_time());
        m.update_score(10, 2);
        assert_eq!(m.home_score, 10);
        assert_eq!(m.away_score, 2);
        assert_eq!(m.total_score(), 12);

        m.update_score(1, 0);
        assert_eq!(m.total_score(), 1);
    }

    #[test]
    fn test_end_sets_end_time_once() {
        let mut m = Match::new("Germany", "France", start_time());
        let at = start_time() + chrono::Duration::minutes(90);

        assert_eq!(m.end(at), at);
        assert_eq!(m.end_time, Some(at));
        assert!(m.has_ended());
    }

    #[test]
    fn test_summary_snapshot_mirrors_record() {
        let mut m = Match::new("Uruguay", "Italy", start_time());
        m.update_score(6, 6);

        let snapshot = MatchSummary::from(&m);
        assert_eq!(snapshot.id, m.id);
        assert_eq!(snapshot.home_team, "Uruguay");
        assert_eq!(snapshot.away_team, "Italy");
        assert_eq!(snapshot.home_score, 6);
        assert_eq!(snapshot.away_score, 6);
        assert_eq!(snapshot.start_time, m.start_time);
        assert_eq!(snapshot.end_time, None);
        assert!(!snapshot.has_ended);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let m = Match::new("Mexico", "Canada", start_time());
        let snapshot = MatchSummary::from(&m);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["homeTeam"], "Mexico");
        assert_eq!(json["awayTeam"], "Canada");
        assert_eq!(json["homeScore"], 0);
        assert_eq!(json["awayScore"], 0);
        assert_eq!(json["hasEnded"], false);
        assert!(json["endTime"].is_null());
    }
}
