//! quiz-setup binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), creates a
//! fresh per-run SQLite database, creates the schema and loads the question
//! bank. The database path is printed on stdout for the game loop to pick up.
//!
//! ```
//! cargo run -p quiz-setup -- --config config.toml
//! cargo run -p quiz-setup -- reset --db db/db-1700000000000.sqlite
//! ```

mod settings;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Utc;
use clap::{Parser, Subcommand};
use quiz_core::store::GameStore as _;
use quiz_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Quiz session database setup")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Create a fresh session database and load the question bank (default).
  Start,
  /// Clear comments, votes and the leaderboard of an existing database.
  Reset {
    #[arg(long)]
    db: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command.unwrap_or(Command::Start) {
    Command::Start => start(&cli.config).await,
    Command::Reset { db } => reset(&db).await,
  }
}

async fn start(config_path: &Path) -> anyhow::Result<()> {
  let cfg = settings::load(config_path)?;
  let dir = settings::expand_tilde(&cfg.store.dir);

  let store = SqliteStore::create_for_session(&dir, Utc::now())
    .await
    .with_context(|| format!("failed to create session database in {dir:?}"))?;
  store.init().await.context("failed to create schema")?;
  store
    .insert_questions(&cfg.game.questions)
    .await
    .context("failed to load question bank")?;

  if let Some(path) = store.path() {
    println!("{}", path.display());
  }
  store.close().await?;
  Ok(())
}

async fn reset(db: &Path) -> anyhow::Result<()> {
  anyhow::ensure!(db.is_file(), "no database at {db:?}");

  let store = SqliteStore::open(db)
    .await
    .with_context(|| format!("failed to open {db:?}"))?;
  store.clear_comment().await.context("failed to clear comments")?;
  store.clear_player_votes().await.context("failed to clear votes")?;
  store.clear_players().await.context("failed to clear players")?;

  tracing::info!(db = %db.display(), "event logs and leaderboard cleared");
  store.close().await?;
  Ok(())
}
