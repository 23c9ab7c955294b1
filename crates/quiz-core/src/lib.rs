//! Core types and trait definitions for the quiz persistence layer.
//!
//! This crate is deliberately free of database dependencies. The game loop
//! builds these values in memory and hands them to a [`store::GameStore`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod comment;
pub mod player;
pub mod question;
pub mod store;

pub use comment::Comment;
pub use player::{Player, PlayerVote};
pub use question::{OptionConfig, QuestionConfig};
