//! Setup configuration, deserialised from `config.toml` and `QUIZ_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, ConfigBuilder, builder::DefaultState};
use quiz_core::QuestionConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SetupConfig {
  #[serde(default)]
  pub store: StoreConfig,
  #[serde(default)]
  pub game:  GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
  /// Directory that receives one `db-<ms>.sqlite` file per run.
  #[serde(default = "default_dir")]
  pub dir: PathBuf,
}

impl Default for StoreConfig {
  fn default() -> Self { Self { dir: default_dir() } }
}

fn default_dir() -> PathBuf { PathBuf::from("db") }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfig {
  #[serde(default)]
  pub questions: Vec<QuestionConfig>,
}

/// Layer the optional file at `path` under `QUIZ_`-prefixed env vars
/// (`QUIZ_STORE__DIR=/var/lib/quiz`).
pub fn load(path: &Path) -> anyhow::Result<SetupConfig> {
  build(
    Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("QUIZ")
          .prefix_separator("_")
          .separator("__"),
      ),
  )
}

fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<SetupConfig> {
  builder
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("failed to deserialise SetupConfig")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
