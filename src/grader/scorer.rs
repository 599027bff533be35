use crate::models::{
    AnswerKey, AnswerRecord, AnswerValue, Expected, KeyEntry, QuestionLabels, QuestionResult,
    QuizDefinition, ScoreReport,
};

const NOT_ANSWERED: &str = "Not answered";
const NONE_SELECTED: &str = "None selected";

/// Scores normalized answers against a fixed key.
#[derive(Debug, Clone)]
pub struct Scorer {
    key: AnswerKey,
    labels: QuestionLabels,
    pass_threshold: u32,
}

impl Scorer {
    pub fn new(key: AnswerKey, labels: QuestionLabels, pass_threshold: u32) -> Self {
        Self {
            key,
            labels,
            pass_threshold,
        }
    }

    pub fn from_definition(quiz: &QuizDefinition) -> Self {
        Self::new(
            AnswerKey::from_definition(quiz),
            QuestionLabels::from_definition(quiz),
            quiz.pass_threshold,
        )
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    pub fn score(&self, record: &AnswerRecord) -> ScoreReport {
        let questions: Vec<QuestionResult> = self
            .key
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let answer = record.get(&entry.id);
                QuestionResult {
                    number: index + 1,
                    correct: answer.is_some_and(|a| is_correct(&entry.expected, a)),
                    user_answer: self.user_answer_text(entry, answer),
                    correct_answer: entry.correct_text.clone(),
                }
            })
            .collect();

        let total_correct = questions.iter().filter(|q| q.correct).count();
        let max_score = self.key.len();
        let percentage = percentage(total_correct, max_score);

        ScoreReport {
            questions,
            total_correct,
            max_score,
            percentage,
            passed: percentage >= self.pass_threshold,
        }
    }

    fn user_answer_text(&self, entry: &KeyEntry, answer: Option<&AnswerValue>) -> String {
        match answer {
            Some(AnswerValue::Text { original, .. }) if !original.is_empty() => original.clone(),
            Some(AnswerValue::Choice(Some(letter))) => {
                self.labels.label_or_token(&entry.id, letter).to_string()
            }
            Some(AnswerValue::Choices(letters)) if !letters.is_empty() => letters
                .iter()
                .map(|letter| self.labels.label_or_token(&entry.id, letter))
                .collect::<Vec<_>>()
                .join(", "),
            Some(AnswerValue::Choices(_)) => NONE_SELECTED.to_string(),
            _ => NOT_ANSWERED.to_string(),
        }
    }
}

fn is_correct(expected: &Expected, answer: &AnswerValue) -> bool {
    match (expected, answer) {
        (Expected::Text { canonical, accepted }, AnswerValue::Text { folded, .. }) => {
            !folded.is_empty() && (folded == canonical || accepted.contains(folded))
        }
        (Expected::Single(key), AnswerValue::Choice(Some(letter))) => key == letter,
        (Expected::Multi(key), AnswerValue::Choices(letters)) => key == letters,
        _ => false,
    }
}

/// `total / max * 100`, rounded half up.
fn percentage(total: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    ((total * 200 + max) / (2 * max)) as u32
}
