//! SQLite backend for the quiz persistence layer.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on the connection's
//! own thread without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{SqliteStore, session_file_name};
