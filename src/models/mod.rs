mod answer;
mod question;
mod report;

pub use answer::{
    AnswerKey, AnswerRecord, AnswerValue, Expected, FormSnapshot, KeyEntry, QuestionLabels,
    RawField,
};
pub(crate) use answer::fold;
pub use question::{Choice, Question, QuestionKind, QuizDefinition};
pub use report::{QuestionResult, ScoreReport};

/// Which screen the terminal quiz is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Form,
    Results,
}

/// Where one quiz attempt is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Partial,
    Complete,
    Scored,
}
