//! Answer checking and scoring.
//!
//! A submission flows through three steps: [`validate`] rejects incomplete
//! snapshots, [`normalize`] turns raw field values into an [`AnswerRecord`],
//! and [`Scorer::score`] produces the [`ScoreReport`]. [`Grader::submit`]
//! runs all three.

mod normalize;
mod scorer;
mod validate;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{AnswerRecord, FormSnapshot, QuizDefinition, ScoreReport};

pub use normalize::normalize;
pub use scorer::Scorer;
pub use validate::{is_complete, validate};

/// Notice shown to the user when a submission is rejected.
pub const INCOMPLETE_NOTICE: &str = "Please answer all questions before submitting!";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GradeError {
    /// One or more questions have no answer. Holds 1-based question numbers.
    #[error("{} (unanswered: {})", INCOMPLETE_NOTICE, join_numbers(.unanswered))]
    IncompleteSubmission { unanswered: Vec<usize> },
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grades whole submissions against one quiz.
#[derive(Debug, Clone)]
pub struct Grader {
    scorer: Scorer,
}

impl Grader {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    pub fn from_definition(quiz: &QuizDefinition) -> Self {
        Self::new(Scorer::from_definition(quiz))
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn is_complete(&self, snapshot: &FormSnapshot) -> bool {
        is_complete(snapshot, self.scorer.key())
    }

    pub fn normalize(&self, snapshot: &FormSnapshot) -> AnswerRecord {
        normalize(snapshot, self.scorer.key())
    }

    /// Validate, normalize and score one snapshot.
    pub fn submit(&self, snapshot: &FormSnapshot) -> Result<ScoreReport, GradeError> {
        if let Err(err) = validate(snapshot, self.scorer.key()) {
            warn!(%err, "submission rejected");
            return Err(err);
        }

        let record = self.normalize(snapshot);
        let report = self.scorer.score(&record);
        info!(
            total = report.total_correct,
            max = report.max_score,
            percentage = report.percentage,
            passed = report.passed,
            "submission scored"
        );

        Ok(report)
    }
}
