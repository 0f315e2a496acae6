//! In-memory live match scoreboard.
//!
//! This crate provides:
//! - Match lifecycle tracking (start -> update -> finish)
//! - Busy-team enforcement: a team is in at most one unfinished match
//! - Ranked summaries of matches in progress (combined score, then recency)
//! - An injectable clock so tests control time without sleeping
//!
//! All state lives in process memory for the lifetime of the [`Scoreboard`];
//! there is no persistence and no I/O. Hosts that need concurrent access
//! share a [`SharedScoreboard`] handle instead.
//!
//! ```
//! use scoreboard_core::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! let id = board.start_match("Spain", "Brazil")?;
//! board.update_score(&id, 10, 2)?;
//!
//! for m in board.summary() {
//!     println!("{} {} - {} {}", m.home_team, m.home_score, m.away_score, m.away_team);
//! }
//!
//! board.finish_match(&id)?;
//! # Ok::<(), scoreboard_core::ScoreboardError>(())
//! ```

pub mod clock;
pub mod error;
pub mod scoreboard;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ScoreboardError, TeamSide};
pub use scoreboard::{Scoreboard, SharedScoreboard};
pub use types::{Match, MatchSummary};
