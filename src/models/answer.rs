use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::question::{QuestionKind, QuizDefinition};

/// The correct value for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Case-folded canonical answer plus any case-folded synonyms.
    Text {
        canonical: String,
        accepted: Vec<String>,
    },
    Single(String),
    Multi(BTreeSet<String>),
}

#[derive(Debug, Clone)]
pub struct KeyEntry {
    pub id: String,
    pub expected: Expected,
    /// Human-readable correct answer shown after grading.
    pub correct_text: String,
}

/// Correct answers for every question, in question order.
#[derive(Debug, Clone)]
pub struct AnswerKey {
    entries: Vec<KeyEntry>,
}

impl AnswerKey {
    pub fn new(entries: Vec<KeyEntry>) -> Self {
        Self { entries }
    }

    pub fn from_definition(quiz: &QuizDefinition) -> Self {
        let entries = quiz
            .questions
            .iter()
            .map(|question| {
                let (expected, correct_text) = match &question.kind {
                    QuestionKind::FillIn {
                        answer,
                        accepted,
                        display,
                    } => (
                        Expected::Text {
                            canonical: fold(answer),
                            accepted: accepted.iter().map(|a| fold(a)).collect(),
                        },
                        display.clone().unwrap_or_else(|| answer.trim().to_string()),
                    ),
                    QuestionKind::SingleSelect {
                        options,
                        answer,
                        display,
                    } => {
                        let text = display.clone().unwrap_or_else(|| {
                            options
                                .iter()
                                .find(|o| &o.id == answer)
                                .map(|o| o.label.clone())
                                .unwrap_or_else(|| answer.clone())
                        });
                        (Expected::Single(answer.clone()), text)
                    }
                    QuestionKind::MultiSelect {
                        options,
                        answers,
                        display,
                    } => {
                        let text = display.clone().unwrap_or_else(|| {
                            options
                                .iter()
                                .filter(|o| answers.contains(&o.id))
                                .map(|o| o.label.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        });
                        (Expected::Multi(answers.clone()), text)
                    }
                };

                KeyEntry {
                    id: question.id.clone(),
                    expected,
                    correct_text,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display labels keyed by question id, then choice letter.
#[derive(Debug, Clone, Default)]
pub struct QuestionLabels {
    labels: BTreeMap<String, BTreeMap<String, String>>,
}

impl QuestionLabels {
    pub fn from_definition(quiz: &QuizDefinition) -> Self {
        let labels = quiz
            .questions
            .iter()
            .filter(|q| !q.options().is_empty())
            .map(|q| {
                let choices = q
                    .options()
                    .iter()
                    .map(|o| (o.id.clone(), o.label.clone()))
                    .collect();
                (q.id.clone(), choices)
            })
            .collect();

        Self { labels }
    }

    pub fn get(&self, question: &str, choice: &str) -> Option<&str> {
        self.labels
            .get(question)
            .and_then(|choices| choices.get(choice))
            .map(String::as_str)
    }

    /// Label for a choice, or the raw token when the choice is unknown.
    pub fn label_or_token<'a>(&'a self, question: &str, choice: &'a str) -> &'a str {
        self.get(question, choice).unwrap_or(choice)
    }
}

/// Raw value of one form field, as read from the input surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// A text box value or the letter of the checked radio button.
    One(String),
    /// Letters of every checked box.
    Many(Vec<String>),
}

/// Read-only snapshot of the form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, RawField>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, id: &str, value: &str) -> Self {
        self.fields
            .insert(id.to_string(), RawField::One(value.to_string()));
        self
    }

    pub fn with_choice(self, id: &str, letter: &str) -> Self {
        self.with_text(id, letter)
    }

    pub fn with_choices(mut self, id: &str, letters: &[&str]) -> Self {
        self.fields.insert(
            id.to_string(),
            RawField::Many(letters.iter().map(|l| l.to_string()).collect()),
        );
        self
    }

    pub fn insert(&mut self, id: String, field: RawField) {
        self.fields.insert(id, field);
    }

    pub fn get(&self, id: &str) -> Option<&RawField> {
        self.fields.get(id)
    }
}

/// A normalized answer for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// `original` is trimmed only; `folded` is trimmed and lower-cased.
    Text { original: String, folded: String },
    Choice(Option<String>),
    Choices(BTreeSet<String>),
}

/// Normalized answers, one per key entry and in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    values: Vec<(String, AnswerValue)>,
}

impl AnswerRecord {
    pub fn new(values: Vec<(String, AnswerValue)>) -> Self {
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.values
            .iter()
            .find(|(question, _)| question == id)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> &[(String, AnswerValue)] {
        &self.values
    }
}

pub(crate) fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}
