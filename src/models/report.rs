use serde::{Deserialize, Serialize};

/// Outcome of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub number: usize,
    pub correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
}

/// The graded result of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub questions: Vec<QuestionResult>,
    pub total_correct: usize,
    pub max_score: usize,
    pub percentage: u32,
    pub passed: bool,
}
