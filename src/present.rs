//! Turns a [`ScoreReport`] into the text shown to the user.

use std::fmt;

use crate::models::{QuestionResult, ScoreReport};

/// Overall verdict shown above the question details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub passed: bool,
    pub headline: &'static str,
    pub score: String,
    pub percentage: String,
    pub message: &'static str,
}

/// One question's outcome. `correct_answer` is only set for wrong answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub title: String,
    pub correct: bool,
    pub status: &'static str,
    pub your_answer: String,
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub banner: Banner,
    pub details: Vec<Detail>,
}

impl Presentation {
    pub fn from_report(report: &ScoreReport) -> Self {
        let banner = Banner {
            passed: report.passed,
            headline: if report.passed { "PASSED!" } else { "FAILED" },
            score: format!("{} / {}", report.total_correct, report.max_score),
            percentage: format!("Score: {}%", report.percentage),
            message: if report.passed {
                "Great job! You have a solid understanding of web server evolution."
            } else {
                "Keep studying! Review the content and try again."
            },
        };

        Self {
            banner,
            details: report.questions.iter().map(detail).collect(),
        }
    }
}

fn detail(result: &QuestionResult) -> Detail {
    Detail {
        title: format!("Question {}", result.number),
        correct: result.correct,
        status: if result.correct {
            "✓ Correct"
        } else {
            "✗ Incorrect"
        },
        your_answer: result.user_answer.clone(),
        correct_answer: (!result.correct).then(|| result.correct_answer.clone()),
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner.headline)?;
        writeln!(f, "{}", self.banner.score)?;
        writeln!(f, "{}", self.banner.percentage)?;
        writeln!(f, "{}", self.banner.message)?;

        for detail in &self.details {
            writeln!(f)?;
            writeln!(f, "{}", detail.title)?;
            writeln!(f, "{}", detail.status)?;
            writeln!(f, "Your answer: {}", detail.your_answer)?;
            if let Some(correct) = &detail.correct_answer {
                writeln!(f, "Correct answer: {}", correct)?;
            }
        }

        Ok(())
    }
}
