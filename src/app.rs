use std::collections::BTreeSet;

use tracing::debug;

use crate::grader::{Grader, INCOMPLETE_NOTICE};
use crate::models::{
    AppState, FormSnapshot, Question, QuestionKind, QuizDefinition, QuizPhase, RawField,
    ScoreReport,
};

/// Current input of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Text(String),
    Radio(Option<usize>),
    Checkboxes(BTreeSet<usize>),
}

impl FieldState {
    fn empty_for(question: &Question) -> Self {
        match question.kind {
            QuestionKind::FillIn { .. } => Self::Text(String::new()),
            QuestionKind::SingleSelect { .. } => Self::Radio(None),
            QuestionKind::MultiSelect { .. } => Self::Checkboxes(BTreeSet::new()),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Radio(selected) => selected.is_none(),
            Self::Checkboxes(checked) => checked.is_empty(),
        }
    }
}

/// Every input on the quiz form, one field per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FieldState>,
}

impl FormState {
    pub fn new(quiz: &QuizDefinition) -> Self {
        Self {
            fields: quiz.questions.iter().map(FieldState::empty_for).collect(),
        }
    }

    pub fn field(&self, question: usize) -> Option<&FieldState> {
        self.fields.get(question)
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(FieldState::is_blank)
    }

    /// Reads the current inputs into a snapshot keyed by question id.
    pub fn snapshot(&self, quiz: &QuizDefinition) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();

        for (question, field) in quiz.questions.iter().zip(&self.fields) {
            let options = question.options();
            let raw = match field {
                FieldState::Text(text) => Some(RawField::One(text.clone())),
                FieldState::Radio(selected) => selected
                    .and_then(|index| options.get(index))
                    .map(|choice| RawField::One(choice.id.clone())),
                FieldState::Checkboxes(checked) => Some(RawField::Many(
                    checked
                        .iter()
                        .filter_map(|index| options.get(*index))
                        .map(|choice| choice.id.clone())
                        .collect(),
                )),
            };

            if let Some(raw) = raw {
                snapshot.insert(question.id.clone(), raw);
            }
        }

        snapshot
    }
}

/// One focusable line of the form: a text box or a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub question: usize,
    pub option: Option<usize>,
}

fn build_rows(quiz: &QuizDefinition) -> Vec<Row> {
    quiz.questions
        .iter()
        .enumerate()
        .flat_map(|(question, q)| {
            if q.is_fill_in() {
                vec![Row {
                    question,
                    option: None,
                }]
            } else {
                (0..q.options().len())
                    .map(|option| Row {
                        question,
                        option: Some(option),
                    })
                    .collect()
            }
        })
        .collect()
}

pub struct App {
    pub state: AppState,
    quiz: QuizDefinition,
    grader: Grader,
    form: FormState,
    rows: Vec<Row>,
    cursor: usize,
    report: Option<ScoreReport>,
    notice: Option<&'static str>,
    result_scroll: usize,
}

impl App {
    pub fn new(quiz: QuizDefinition) -> Self {
        let grader = Grader::from_definition(&quiz);
        let form = FormState::new(&quiz);
        let rows = build_rows(&quiz);

        Self {
            state: AppState::Form,
            quiz,
            grader,
            form,
            rows,
            cursor: 0,
            report: None,
            notice: None,
            result_scroll: 0,
        }
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn focused_row(&self) -> Option<Row> {
        self.rows.get(self.cursor).copied()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn phase(&self) -> QuizPhase {
        if self.report.is_some() {
            QuizPhase::Scored
        } else if self.form.is_blank() {
            QuizPhase::Unanswered
        } else if self.grader.is_complete(&self.form.snapshot(&self.quiz)) {
            QuizPhase::Complete
        } else {
            QuizPhase::Partial
        }
    }

    pub fn is_editing_text(&self) -> bool {
        self.focused_row().is_some_and(|row| row.option.is_none())
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn select_next_row(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + 1) % self.rows.len();
        }
    }

    pub fn select_previous_row(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + self.rows.len() - 1) % self.rows.len();
        }
    }

    /// Jumps to the first row of the next question.
    pub fn select_next_question(&mut self) {
        let Some(current) = self.focused_row() else {
            return;
        };
        let next = (current.question + 1) % self.quiz.questions.len();
        self.focus_question(next);
    }

    pub fn select_previous_question(&mut self) {
        let Some(current) = self.focused_row() else {
            return;
        };
        let count = self.quiz.questions.len();
        let previous = (current.question + count - 1) % count;
        self.focus_question(previous);
    }

    fn focus_question(&mut self, question: usize) {
        if let Some(index) = self.rows.iter().position(|row| row.question == question) {
            self.cursor = index;
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(FieldState::Text(text)) = self.focused_field_mut() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(FieldState::Text(text)) = self.focused_field_mut() {
            text.pop();
        }
    }

    /// Selects the focused radio option or toggles the focused checkbox.
    pub fn activate(&mut self) {
        let Some(Row {
            question,
            option: Some(option),
        }) = self.focused_row()
        else {
            return;
        };

        match self.form.fields.get_mut(question) {
            Some(FieldState::Radio(selected)) => *selected = Some(option),
            Some(FieldState::Checkboxes(checked)) => {
                if !checked.remove(&option) {
                    checked.insert(option);
                }
            }
            _ => {}
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        let row = self.focused_row()?;
        self.form.fields.get_mut(row.question)
    }

    /// Grades the form. An incomplete form raises the notice and leaves no report.
    pub fn submit(&mut self) {
        let snapshot = self.form.snapshot(&self.quiz);
        match self.grader.submit(&snapshot) {
            Ok(report) => {
                self.report = Some(report);
                self.notice = None;
                self.result_scroll = 0;
                self.state = AppState::Results;
            }
            Err(_) => {
                self.report = None;
                self.notice = Some(INCOMPLETE_NOTICE);
            }
        }
    }

    /// Returns to the form, keeping answers and the last report.
    pub fn show_form(&mut self) {
        self.state = AppState::Form;
    }

    pub fn scroll_results_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Clears every input and discards the report.
    pub fn reset(&mut self) {
        debug!("quiz reset");
        self.state = AppState::Form;
        self.form = FormState::new(&self.quiz);
        self.cursor = 0;
        self.report = None;
        self.notice = None;
        self.result_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::web_server_quiz;

    fn app() -> App {
        App::new(web_server_quiz())
    }

    fn focus(app: &mut App, question: usize, option: Option<usize>) {
        let target = Row { question, option };
        while app.focused_row() != Some(target) {
            app.select_next_row();
        }
    }

    fn answer_all(app: &mut App) {
        for c in "CERN httpd".chars() {
            app.type_char(c);
        }
        for (question, option) in [(1, 1), (2, 1), (3, 0), (4, 0), (4, 1), (4, 3)] {
            focus(app, question, Some(option));
            app.activate();
        }
    }

    #[test]
    fn test_rows_cover_every_input() {
        let app = app();
        // 1 text box + 4 + 4 + 4 + 5 options
        assert_eq!(app.rows().len(), 18);
        assert!(app.is_editing_text());
    }

    #[test]
    fn test_phase_moves_through_lifecycle() {
        let mut app = app();
        assert_eq!(app.phase(), QuizPhase::Unanswered);

        app.type_char('c');
        assert_eq!(app.phase(), QuizPhase::Partial);

        app.delete_char();
        answer_all(&mut app);
        assert_eq!(app.phase(), QuizPhase::Complete);

        app.submit();
        assert_eq!(app.phase(), QuizPhase::Scored);
        assert_eq!(app.state, AppState::Results);

        let report = app.report().unwrap();
        assert_eq!(report.total_correct, 5);
        assert!(report.passed);
    }

    #[test]
    fn test_incomplete_submit_sets_notice() {
        let mut app = app();
        app.type_char('x');
        app.submit();

        assert_eq!(app.notice(), Some(INCOMPLETE_NOTICE));
        assert!(app.report().is_none());
        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.phase(), QuizPhase::Partial);
    }

    #[test]
    fn test_checkbox_toggles_off() {
        let mut app = app();
        focus(&mut app, 4, Some(2));
        app.activate();
        app.activate();
        assert_eq!(
            app.form().field(4),
            Some(&FieldState::Checkboxes(BTreeSet::new()))
        );
    }

    #[test]
    fn test_radio_keeps_single_selection() {
        let mut app = app();
        focus(&mut app, 1, Some(0));
        app.activate();
        focus(&mut app, 1, Some(3));
        app.activate();
        assert_eq!(app.form().field(1), Some(&FieldState::Radio(Some(3))));
    }

    #[test]
    fn test_typing_ignored_on_option_rows() {
        let mut app = app();
        focus(&mut app, 2, Some(0));
        app.type_char('z');
        assert!(app.form().is_blank());
    }

    #[test]
    fn test_snapshot_uses_choice_ids() {
        let mut app = app();
        answer_all(&mut app);
        let snapshot = app.form().snapshot(app.quiz());

        assert_eq!(snapshot.get("q1"), Some(&RawField::One("CERN httpd".to_string())));
        assert_eq!(snapshot.get("q2"), Some(&RawField::One("b".to_string())));
        assert_eq!(
            snapshot.get("q5"),
            Some(&RawField::Many(vec![
                "a".to_string(),
                "b".to_string(),
                "d".to_string()
            ]))
        );
    }

    #[test]
    fn test_question_navigation_wraps() {
        let mut app = app();
        app.select_previous_question();
        assert_eq!(app.focused_row().map(|r| r.question), Some(4));
        app.select_next_question();
        assert_eq!(app.focused_row(), Some(Row { question: 0, option: None }));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut app = app();
        answer_all(&mut app);
        app.submit();

        app.reset();
        let after_once = (app.form().clone(), app.phase(), app.state, app.focused_row());
        app.reset();
        let after_twice = (app.form().clone(), app.phase(), app.state, app.focused_row());

        assert_eq!(after_once, after_twice);
        assert_eq!(app.phase(), QuizPhase::Unanswered);
        assert!(app.report().is_none());
        assert!(app.notice().is_none());
        assert!(app.form().is_blank());
    }
}
