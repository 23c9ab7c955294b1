//! Encoding helpers between domain types and the plain values stored in
//! SQLite columns.
//!
//! Timestamps are stored as Unix milliseconds, booleans as `0`/`1`. Rows are
//! encoded up front so the owned values can be moved onto the connection
//! thread.

use chrono::{DateTime, Utc};
use quiz_core::{Comment, Player, PlayerVote, QuestionConfig};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_ts(dt: DateTime<Utc>) -> i64 { dt.timestamp_millis() }

pub fn encode_flag(flag: bool) -> i64 { i64::from(flag) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// One `player` row, in column order.
pub struct PlayerRow {
  pub id:              String,
  pub name:            String,
  pub score:           i64,
  pub rank:            i64,
  pub correct_count:   i64,
  pub incorrect_count: i64,
  pub correct_rate:    f64,
  pub create_at:       i64,
}

impl PlayerRow {
  pub fn from_player(p: &Player) -> Self {
    Self {
      id:              p.id.clone(),
      name:            p.name.clone(),
      score:           p.score,
      rank:            p.rank,
      correct_count:   p.correct_count,
      incorrect_count: p.incorrect_count,
      correct_rate:    p.correct_rate,
      create_at:       encode_ts(p.created_at),
    }
  }
}

pub struct CommentRow {
  pub content:   String,
  pub offset:    i64,
  pub create_at: i64,
}

impl CommentRow {
  pub fn from_comment(c: &Comment) -> Self {
    Self {
      content:   c.content.clone(),
      offset:    c.offset,
      create_at: encode_ts(c.created_at),
    }
  }
}

pub struct VoteRow {
  pub player_id:   String,
  pub question_id: i64,
  pub option_id:   i64,
  pub time:        i64,
  pub is_answer:   i64,
}

impl VoteRow {
  pub fn from_vote(v: &PlayerVote) -> Self {
    Self {
      player_id:   v.player_id.clone(),
      question_id: v.question_id,
      option_id:   v.option_id,
      time:        encode_ts(v.time),
      is_answer:   encode_flag(v.is_answer),
    }
  }
}

pub struct QuestionRow {
  pub id:      i64,
  pub content: String,
}

pub struct OptionRow {
  pub id:          i64,
  pub question_id: i64,
  pub content:     String,
  pub is_answer:   i64,
}

/// Flatten the question bank into `question` and `option` rows.
///
/// `isAnswer` is fixed here, from the option's membership in its question's
/// answer list.
pub fn question_rows(questions: &[QuestionConfig]) -> (Vec<QuestionRow>, Vec<OptionRow>) {
  let question_rows = questions
    .iter()
    .map(|q| QuestionRow { id: q.id, content: q.text.clone() })
    .collect();

  let option_rows = questions
    .iter()
    .flat_map(|q| {
      q.options.iter().map(move |o| OptionRow {
        id:          o.id,
        question_id: q.id,
        content:     o.text.clone(),
        is_answer:   encode_flag(q.is_answer(o.id)),
      })
    })
    .collect();

  (question_rows, option_rows)
}
