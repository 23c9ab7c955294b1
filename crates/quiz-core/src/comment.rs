//! Audience comments — an append-only event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audience comment as received from the live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub content:    String,
  /// Position of the comment within the stream.
  pub offset:     i64,
  #[serde(rename = "createAt", with = "chrono::serde::ts_milliseconds")]
  pub created_at: DateTime<Utc>,
}
