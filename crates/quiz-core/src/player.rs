//! Players and their answer submissions.
//!
//! A [`Player`] is one row of the leaderboard snapshot; the whole snapshot is
//! replaced on every scoring tick. A [`PlayerVote`] is an immutable record of
//! one submission and is only ever appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Leaderboard ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
  /// Stable identity supplied by the chat platform.
  pub id:              String,
  pub name:            String,
  pub score:           i64,
  pub rank:            i64,
  pub correct_count:   i64,
  pub incorrect_count: i64,
  pub correct_rate:    f64,
  #[serde(rename = "createAt", with = "chrono::serde::ts_milliseconds")]
  pub created_at:      DateTime<Utc>,
}

impl Player {
  /// Fraction of answered questions that were correct; `0.0` when the player
  /// has not answered anything yet.
  pub fn correct_rate_of(correct: i64, incorrect: i64) -> f64 {
    let total = correct + incorrect;
    if total <= 0 {
      return 0.0;
    }
    correct as f64 / total as f64
  }
}

// ─── Votes ───────────────────────────────────────────────────────────────────

/// One answer submission. Multiple votes per player are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerVote {
  pub player_id:   String,
  pub question_id: i64,
  pub option_id:   i64,
  #[serde(with = "chrono::serde::ts_milliseconds")]
  pub time:        DateTime<Utc>,
  pub is_answer:   bool,
}
