use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{QuestionKind, QuizDefinition};

/// Errors raised while reading a quiz definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Invalid(#[from] DefinitionError),
}

/// Reasons a parsed quiz definition is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("quiz must contain at least one question")]
    Empty,

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("question '{question}' lists choice '{choice}' more than once")]
    DuplicateChoice { question: String, choice: String },

    #[error("question '{question}' has no options")]
    NoOptions { question: String },

    #[error("question '{question}' expects '{choice}', which is not one of its options")]
    UnknownChoice { question: String, choice: String },

    #[error("question '{0}' has an empty answer")]
    EmptyAnswer(String),

    #[error("pass threshold {0} is above 100")]
    ThresholdOutOfRange(u32),
}

pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizDefinition, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading quiz definition");

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz: QuizDefinition =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_definition(&quiz)?;
    info!(
        path = %path.display(),
        questions = quiz.questions.len(),
        "loaded quiz definition"
    );

    Ok(quiz)
}

pub fn validate_definition(quiz: &QuizDefinition) -> Result<(), DefinitionError> {
    if quiz.questions.is_empty() {
        return Err(DefinitionError::Empty);
    }

    if quiz.pass_threshold > 100 {
        return Err(DefinitionError::ThresholdOutOfRange(quiz.pass_threshold));
    }

    let mut seen = HashSet::new();
    for question in &quiz.questions {
        if !seen.insert(question.id.as_str()) {
            return Err(DefinitionError::DuplicateQuestion(question.id.clone()));
        }

        let mut choices = HashSet::new();
        for choice in question.options() {
            if !choices.insert(choice.id.as_str()) {
                return Err(DefinitionError::DuplicateChoice {
                    question: question.id.clone(),
                    choice: choice.id.clone(),
                });
            }
        }

        let unknown = |choice: &String| DefinitionError::UnknownChoice {
            question: question.id.clone(),
            choice: choice.clone(),
        };

        match &question.kind {
            QuestionKind::FillIn { answer, .. } => {
                if answer.trim().is_empty() {
                    return Err(DefinitionError::EmptyAnswer(question.id.clone()));
                }
            }
            QuestionKind::SingleSelect { options, answer, .. } => {
                if options.is_empty() {
                    return Err(DefinitionError::NoOptions {
                        question: question.id.clone(),
                    });
                }
                if !choices.contains(answer.as_str()) {
                    return Err(unknown(answer));
                }
            }
            QuestionKind::MultiSelect {
                options, answers, ..
            } => {
                if options.is_empty() {
                    return Err(DefinitionError::NoOptions {
                        question: question.id.clone(),
                    });
                }
                if answers.is_empty() {
                    return Err(DefinitionError::EmptyAnswer(question.id.clone()));
                }
                if let Some(choice) = answers.iter().find(|a| !choices.contains(a.as_str())) {
                    return Err(unknown(choice));
                }
            }
        }
    }

    Ok(())
}
