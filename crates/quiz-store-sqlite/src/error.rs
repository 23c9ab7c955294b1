//! Error type for `quiz-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to create database directory {path:?}: {source}")]
  CreateDir {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The database could not be opened or the schema could not be created.
  /// Nothing else is meaningful afterwards.
  #[error("store initialisation failed: {0}")]
  Initialization(#[source] tokio_rusqlite::Error),

  /// An insert, delete or commit failed. Not retried.
  #[error("store write failed: {0}")]
  Write(#[source] tokio_rusqlite::Error),
}

impl Error {
  /// Whether this error should abort process startup.
  pub fn is_initialization(&self) -> bool {
    matches!(self, Self::CreateDir { .. } | Self::Initialization(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
