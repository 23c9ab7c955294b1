//! The `GameStore` trait.
//!
//! Implemented by storage backends (e.g. `quiz-store-sqlite`). The game loop
//! depends on this abstraction, never on the database handle itself.
//!
//! There is no read surface: the store only appends, replaces and clears.

use std::future::Future;

use crate::{
  comment::Comment,
  player::{Player, PlayerVote},
  question::QuestionConfig,
};

/// Write-only persistence for a quiz session.
///
/// A store starts out uninitialized; [`GameStore::init`] must complete before
/// any other method is called. Callers await each call before issuing the
/// next when ordering matters.
pub trait GameStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the schema if absent. Safe to call more than once.
  fn init(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Leaderboard snapshot ──────────────────────────────────────────────

  /// Delete every player row.
  fn clear_players(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Append `players` as new rows, all or none.
  fn insert_players<'a>(
    &'a self,
    players: &'a [Player],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Replace the snapshot with exactly `players`.
  ///
  /// This is the only mutation path for leaderboard state.
  fn update_players<'a>(
    &'a self,
    players: &'a [Player],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  // ── Comment log ───────────────────────────────────────────────────────

  fn insert_comment<'a>(
    &'a self,
    comment: &'a Comment,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn clear_comment(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Question bank ─────────────────────────────────────────────────────

  /// Write one question row per question and one option row per option.
  /// Intended to run once per session.
  fn insert_questions<'a>(
    &'a self,
    questions: &'a [QuestionConfig],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  // ── Vote log ──────────────────────────────────────────────────────────

  fn insert_player_votes<'a>(
    &'a self,
    votes: &'a [PlayerVote],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn clear_player_votes(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
