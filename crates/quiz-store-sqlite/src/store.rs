//! [`SqliteStore`] — the SQLite implementation of [`GameStore`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use quiz_core::{Comment, Player, PlayerVote, QuestionConfig, store::GameStore};

use crate::{
  Error, Result,
  encode::{CommentRow, PlayerRow, VoteRow, question_rows},
  schema::{SCHEMA, TABLES},
};

/// File name of the database created for a process started at `started_at`.
pub fn session_file_name(started_at: DateTime<Utc>) -> String {
  format!("db-{}.sqlite", started_at.timestamp_millis())
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A quiz store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone shares the same single writer thread.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
  path:            Option<PathBuf>,
}

impl SqliteStore {
  /// Open (or create) a store at `path`.
  ///
  /// The schema is not created here; call [`GameStore::init`] next.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let conn = tokio_rusqlite::Connection::open(&path)
      .await
      .map_err(Error::Initialization)?;
    tracing::info!(path = %path.display(), "opened quiz database");
    Ok(Self { conn, path: Some(path) })
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Initialization)?;
    Ok(Self { conn, path: None })
  }

  /// Create `dir` if needed and open a fresh `db-<ms>.sqlite` inside it.
  ///
  /// Old session files are left alone.
  pub async fn create_for_session(
    dir:        impl AsRef<Path>,
    started_at: DateTime<Utc>,
  ) -> Result<Self> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir)
      .await
      .map_err(|source| Error::CreateDir { path: dir.to_path_buf(), source })?;
    Self::open(dir.join(session_file_name(started_at))).await
  }

  /// Backing file, or `None` for an in-memory store.
  pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

  /// Close the connection. Other clones of this store fail afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await.map_err(Error::Write)?;
    tracing::info!("closed quiz database");
    Ok(())
  }

  async fn clear_table(&self, table: &'static str) -> Result<()> {
    let deleted = self
      .conn
      .call(move |conn| Ok(conn.execute(&format!("DELETE FROM {table}"), [])?))
      .await
      .map_err(Error::Write)?;
    tracing::debug!(table, deleted, "cleared table");
    Ok(())
  }
}

/// Insert `rows` through one cached statement. Runs inside the caller's
/// transaction.
fn insert_player_rows(
  conn: &rusqlite::Connection,
  rows: &[PlayerRow],
) -> rusqlite::Result<()> {
  let mut stmt = conn.prepare_cached(
    "INSERT INTO player (
       id, name, score, rank, correctCount,
       incorrectCount, correctRate, createAt
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
  )?;
  for row in rows {
    stmt.execute(rusqlite::params![
      row.id,
      row.name,
      row.score,
      row.rank,
      row.correct_count,
      row.incorrect_count,
      row.correct_rate,
      row.create_at,
    ])?;
  }
  Ok(())
}

// ─── GameStore impl ──────────────────────────────────────────────────────────

impl GameStore for SqliteStore {
  type Error = Error;

  async fn init(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::Initialization)?;
    tracing::info!(tables = ?TABLES, "schema ready");
    Ok(())
  }

  // ── Leaderboard snapshot ──────────────────────────────────────────────────

  async fn clear_players(&self) -> Result<()> { self.clear_table("player").await }

  async fn insert_players(&self, players: &[Player]) -> Result<()> {
    if players.is_empty() {
      return Ok(());
    }
    let rows: Vec<PlayerRow> = players.iter().map(PlayerRow::from_player).collect();
    let count = rows.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        insert_player_rows(&tx, &rows)?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::Write)?;

    tracing::debug!(count, "inserted players");
    Ok(())
  }

  async fn update_players(&self, players: &[Player]) -> Result<()> {
    let rows: Vec<PlayerRow> = players.iter().map(PlayerRow::from_player).collect();
    let count = rows.len();

    // Clear and refill commit together.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM player", [])?;
        insert_player_rows(&tx, &rows)?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::Write)?;

    tracing::debug!(count, "replaced player snapshot");
    Ok(())
  }

  // ── Comment log ───────────────────────────────────────────────────────────

  async fn insert_comment(&self, comment: &Comment) -> Result<()> {
    let row = CommentRow::from_comment(comment);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO comment (content, \"offset\", createAt) VALUES (?1, ?2, ?3)",
          rusqlite::params![row.content, row.offset, row.create_at],
        )?;
        Ok(())
      })
      .await
      .map_err(Error::Write)?;
    Ok(())
  }

  async fn clear_comment(&self) -> Result<()> { self.clear_table("comment").await }

  // ── Question bank ─────────────────────────────────────────────────────────

  async fn insert_questions(&self, questions: &[QuestionConfig]) -> Result<()> {
    if questions.is_empty() {
      return Ok(());
    }
    let (questions, options) = question_rows(questions);
    let (question_count, option_count) = (questions.len(), options.len());

    // Both batches share one transaction: a failed option insert also
    // discards the question rows.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt =
            tx.prepare_cached("INSERT INTO question (id, content) VALUES (?1, ?2)")?;
          for q in &questions {
            stmt.execute(rusqlite::params![q.id, q.content])?;
          }

          let mut stmt = tx.prepare_cached(
            "INSERT INTO option (id, questionId, content, isAnswer)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for o in &options {
            stmt.execute(rusqlite::params![o.id, o.question_id, o.content, o.is_answer])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::Write)?;

    tracing::info!(question_count, option_count, "loaded question bank");
    Ok(())
  }

  // ── Vote log ──────────────────────────────────────────────────────────────

  async fn insert_player_votes(&self, votes: &[PlayerVote]) -> Result<()> {
    if votes.is_empty() {
      return Ok(());
    }
    let rows: Vec<VoteRow> = votes.iter().map(VoteRow::from_vote).collect();
    let count = rows.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare_cached(
            "INSERT INTO vote (playerId, questionId, optionId, time, isAnswer)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for v in &rows {
            stmt.execute(rusqlite::params![
              v.player_id,
              v.question_id,
              v.option_id,
              v.time,
              v.is_answer,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::Write)?;

    tracing::debug!(count, "inserted votes");
    Ok(())
  }

  async fn clear_player_votes(&self) -> Result<()> { self.clear_table("vote").await }
}
