//! The question bank, loaded once per session from static configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionConfig {
  pub id:   i64,
  pub text: String,
}

/// A question together with its options and the ids of the correct ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionConfig {
  pub id:      i64,
  pub text:    String,
  #[serde(default)]
  pub options: Vec<OptionConfig>,
  #[serde(default)]
  pub answers: Vec<i64>,
}

impl QuestionConfig {
  /// Whether `option_id` is one of this question's answers.
  pub fn is_answer(&self, option_id: i64) -> bool {
    self.answers.contains(&option_id)
  }
}
