use crate::models::{AnswerKey, Expected, FormSnapshot, RawField};

use super::GradeError;

/// Checks that every question in `key` has an answer in `snapshot`.
///
/// A fill-in field must be non-blank after trimming, a single-select field
/// must hold exactly one letter, and a multi-select field at least one.
pub fn validate(snapshot: &FormSnapshot, key: &AnswerKey) -> Result<(), GradeError> {
    let unanswered: Vec<usize> = key
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| !is_answered(snapshot.get(&entry.id), &entry.expected))
        .map(|(index, _)| index + 1)
        .collect();

    if unanswered.is_empty() {
        Ok(())
    } else {
        Err(GradeError::IncompleteSubmission { unanswered })
    }
}

pub fn is_complete(snapshot: &FormSnapshot, key: &AnswerKey) -> bool {
    validate(snapshot, key).is_ok()
}

fn is_answered(field: Option<&RawField>, expected: &Expected) -> bool {
    let Some(field) = field else {
        return false;
    };

    match (expected, field) {
        (Expected::Text { .. }, RawField::One(text)) => !text.trim().is_empty(),
        (Expected::Single(_), RawField::One(letter)) => !letter.is_empty(),
        (Expected::Single(_), RawField::Many(letters)) => {
            letters.len() == 1 && !letters[0].is_empty()
        }
        (Expected::Multi(_), RawField::One(letter)) => !letter.is_empty(),
        (Expected::Multi(_), RawField::Many(letters)) => letters.iter().any(|l| !l.is_empty()),
        (Expected::Text { .. }, RawField::Many(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::web_server_quiz;

    fn key() -> AnswerKey {
        AnswerKey::from_definition(&web_server_quiz())
    }

    fn complete() -> FormSnapshot {
        FormSnapshot::new()
            .with_text("q1", "cern")
            .with_choice("q2", "b")
            .with_choice("q3", "a")
            .with_choice("q4", "a")
            .with_choices("q5", &["c"])
    }

    #[test]
    fn test_complete_snapshot_passes() {
        assert!(validate(&complete(), &key()).is_ok());
        assert!(is_complete(&complete(), &key()));
    }

    #[test]
    fn test_empty_snapshot_lists_every_question() {
        let err = validate(&FormSnapshot::new(), &key()).unwrap_err();
        assert_eq!(
            err,
            GradeError::IncompleteSubmission {
                unanswered: vec![1, 2, 3, 4, 5]
            }
        );
    }

    #[test]
    fn test_whitespace_text_is_unanswered() {
        let snapshot = complete().with_text("q1", "   \t ");
        let err = validate(&snapshot, &key()).unwrap_err();
        assert_eq!(
            err,
            GradeError::IncompleteSubmission {
                unanswered: vec![1]
            }
        );
    }

    #[test]
    fn test_empty_checkbox_set_is_unanswered() {
        let snapshot = complete().with_choices("q5", &[]);
        assert!(!is_complete(&snapshot, &key()));
    }

    #[test]
    fn test_single_select_needs_exactly_one() {
        let snapshot = complete().with_choices("q2", &["a", "b"]);
        assert!(!is_complete(&snapshot, &key()));

        let snapshot = complete().with_choices("q2", &["b"]);
        assert!(is_complete(&snapshot, &key()));
    }
}
