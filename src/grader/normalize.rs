use std::collections::BTreeSet;

use crate::models::{fold, AnswerKey, AnswerRecord, AnswerValue, Expected, FormSnapshot, RawField};

/// Converts a raw snapshot into the canonical answer shape for `key`.
///
/// Missing fields become empty values. Checked boxes are collected into a
/// set, so the order they were read in has no effect.
pub fn normalize(snapshot: &FormSnapshot, key: &AnswerKey) -> AnswerRecord {
    let values = key
        .entries()
        .iter()
        .map(|entry| {
            let field = snapshot.get(&entry.id);
            let value = match &entry.expected {
                Expected::Text { .. } => {
                    let original = match field {
                        Some(RawField::One(text)) => text.trim().to_string(),
                        _ => String::new(),
                    };
                    let folded = fold(&original);
                    AnswerValue::Text { original, folded }
                }
                Expected::Single(_) => AnswerValue::Choice(single_letter(field)),
                Expected::Multi(_) => AnswerValue::Choices(letter_set(field)),
            };
            (entry.id.clone(), value)
        })
        .collect();

    AnswerRecord::new(values)
}

fn single_letter(field: Option<&RawField>) -> Option<String> {
    match field {
        Some(RawField::One(letter)) if !letter.is_empty() => Some(letter.clone()),
        Some(RawField::Many(letters)) if letters.len() == 1 && !letters[0].is_empty() => {
            Some(letters[0].clone())
        }
        _ => None,
    }
}

fn letter_set(field: Option<&RawField>) -> BTreeSet<String> {
    match field {
        Some(RawField::One(letter)) if !letter.is_empty() => BTreeSet::from([letter.clone()]),
        Some(RawField::Many(letters)) => letters
            .iter()
            .filter(|l| !l.is_empty())
            .cloned()
            .collect(),
        _ => BTreeSet::new(),
    }
}
