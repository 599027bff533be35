use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A complete quiz: its questions in display order and the score needed to pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub title: String,
    /// Minimum percentage for an overall pass.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u32,
    pub questions: Vec<Question>,
}

fn default_pass_threshold() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-text answer, compared case-insensitively.
    FillIn {
        answer: String,
        /// Other spellings that also earn credit.
        #[serde(default)]
        accepted: Vec<String>,
        #[serde(default)]
        display: Option<String>,
    },
    SingleSelect {
        options: Vec<Choice>,
        answer: String,
        #[serde(default)]
        display: Option<String>,
    },
    MultiSelect {
        options: Vec<Choice>,
        answers: BTreeSet<String>,
        #[serde(default)]
        display: Option<String>,
    },
}

/// One selectable option, identified by a lower-case letter token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
}

impl Choice {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

impl Question {
    pub fn options(&self) -> &[Choice] {
        match &self.kind {
            QuestionKind::FillIn { .. } => &[],
            QuestionKind::SingleSelect { options, .. }
            | QuestionKind::MultiSelect { options, .. } => options.as_slice(),
        }
    }

    pub fn is_fill_in(&self) -> bool {
        matches!(self.kind, QuestionKind::FillIn { .. })
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self.kind, QuestionKind::MultiSelect { .. })
    }
}
