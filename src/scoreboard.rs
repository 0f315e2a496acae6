//! Scoreboard registry: lifecycle enforcement, validation, ranked summaries.
//!
//! This module provides:
//! - Match lifecycle management (start -> update -> finish)
//! - Busy-team enforcement: a team is in at most one unfinished match
//! - Ranked summaries of matches in progress
//! - A shared, lock-protected handle for concurrent hosts

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{ScoreboardError, TeamSide};
use crate::types::{Match, MatchSummary};

/// In-memory registry of matches and the teams currently playing.
///
/// All mutation of the match map and the in-play set goes through the
/// validated operations below; a team name is in the in-play set exactly when
/// it participates in an unfinished match.
pub struct Scoreboard {
    /// All matches ever started, keyed by match id. Entries are never
    /// removed; finished matches stay queryable by id.
    matches: FxHashMap<String, Match>,
    /// Names of teams currently in an unfinished match.
    teams_in_play: FxHashSet<String>,
    clock: Arc<dyn Clock>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Create an empty scoreboard on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty scoreboard with an injected time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            matches: FxHashMap::default(),
            teams_in_play: FxHashSet::default(),
            clock,
        }
    }

    /// Start a new match at score 0-0 and return its id.
    ///
    /// Fails if either name is empty or either team is already in an
    /// unfinished match; a failed start leaves the registry untouched.
    pub fn start_match(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Result<String, ScoreboardError> {
        if home_team.is_empty() || away_team.is_empty() {
            return Err(ScoreboardError::EmptyTeamName);
        }
        if self.teams_in_play.contains(home_team) {
            return Err(ScoreboardError::TeamBusy {
                side: TeamSide::Home,
                name: home_team.to_string(),
            });
        }
        if self.teams_in_play.contains(away_team) {
            return Err(ScoreboardError::TeamBusy {
                side: TeamSide::Away,
                name: away_team.to_string(),
            });
        }

        let m = Match::new(home_team, away_team, self.clock.now());
        let id = m.id.clone();
        self.teams_in_play.insert(m.home_team.clone());
        self.teams_in_play.insert(m.away_team.clone());
        self.matches.insert(id.clone(), m);

        info!("started match {}: {} vs {}", id, home_team, away_team);
        Ok(id)
    }

    /// Overwrite the score of an unfinished match.
    pub fn update_score(&mut self, id: &str, home: i32, away: i32) -> Result<(), ScoreboardError> {
        let home = u16::try_from(home).map_err(|_| ScoreboardError::InvalidScore)?;
        let away = u16::try_from(away).map_err(|_| ScoreboardError::InvalidScore)?;

        let m = self.get_unfinished_mut(id)?;
        m.update_score(home, away);

        debug!("match {} score now {}-{}", id, home, away);
        Ok(())
    }

    /// Finish a match, release both teams for new matches, and return the
    /// end time.
    pub fn finish_match(&mut self, id: &str) -> Result<DateTime<Utc>, ScoreboardError> {
        let now = self.clock.now();
        let m = self.get_unfinished_mut(id)?;
        let end_time = m.end(now);
        let home = m.home_team.clone();
        let away = m.away_team.clone();

        // A team is in at most one unfinished match, so unconditional removal
        // of both names is correct.
        self.teams_in_play.remove(&home);
        self.teams_in_play.remove(&away);

        info!("finished match {}: {} vs {}", id, home, away);
        Ok(end_time)
    }

    /// Matches in progress, highest combined score first, ties broken by the
    /// most recent start time. Recomputed from current state on every call.
    pub fn summary(&self) -> Vec<&Match> {
        let mut in_progress: Vec<&Match> =
            self.matches.values().filter(|m| !m.has_ended()).collect();
        in_progress.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.start_time.cmp(&a.start_time))
        });
        in_progress
    }

    /// Snapshot of a single match, finished or not.
    pub fn match_summary(&self, id: &str) -> Result<MatchSummary, ScoreboardError> {
        self.matches
            .get(id)
            .map(MatchSummary::from)
            .ok_or_else(|| ScoreboardError::MatchNotFound(id.to_string()))
    }

    /// Number of matches ever started (finished matches included).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the scoreboard has tracked any match at all.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of teams currently in an unfinished match.
    pub fn in_play_count(&self) -> usize {
        self.teams_in_play.len()
    }

    fn get_unfinished_mut(&mut self, id: &str) -> Result<&mut Match, ScoreboardError> {
        let m = self
            .matches
            .get_mut(id)
            .ok_or_else(|| ScoreboardError::MatchNotFound(id.to_string()))?;
        if m.has_ended() {
            return Err(ScoreboardError::MatchAlreadyEnded(id.to_string()));
        }
        Ok(m)
    }
}

/// Clonable, thread-safe handle around a [`Scoreboard`].
///
/// Each operation holds the lock for its full duration, so the busy-check
/// plus insert on start and the end plus team release on finish stay atomic
/// when multiple threads share the handle.
#[derive(Clone)]
pub struct SharedScoreboard {
    inner: Arc<RwLock<Scoreboard>>,
}

impl Default for SharedScoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedScoreboard {
    /// Shared scoreboard on the system clock.
    pub fn new() -> Self {
        Self::from_scoreboard(Scoreboard::new())
    }

    /// Shared scoreboard with an injected time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_scoreboard(Scoreboard::with_clock(clock))
    }

    fn from_scoreboard(board: Scoreboard) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    pub fn start_match(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<String, ScoreboardError> {
        self.inner.write().start_match(home_team, away_team)
    }

    pub fn update_score(&self, id: &str, home: i32, away: i32) -> Result<(), ScoreboardError> {
        self.inner.write().update_score(id, home, away)
    }

    pub fn finish_match(&self, id: &str) -> Result<DateTime<Utc>, ScoreboardError> {
        self.inner.write().finish_match(id)
    }

    /// Owned snapshots of the ranked in-progress matches (references cannot
    /// escape the lock).
    pub fn summary(&self) -> Vec<MatchSummary> {
        self.inner
            .read()
            .summary()
            .into_iter()
            .map(MatchSummary::from)
            .collect()
    }

    pub fn match_summary(&self, id: &str) -> Result<MatchSummary, ScoreboardError> {
        self.inner.read().match_summary(id)
    }
}
