//! # quiz-grader
//!
//! Grades a short fixed-form quiz: validates that every question has an
//! answer, scores the answers against a fixed key, and renders a
//! per-question breakdown. The grading core is pure; a terminal form is
//! provided on top of it.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_grader::{web_server_quiz, FormSnapshot, Grader};
//!
//! let grader = Grader::from_definition(&web_server_quiz());
//! let snapshot = FormSnapshot::new()
//!     .with_text("q1", "CERN httpd")
//!     .with_choice("q2", "b")
//!     .with_choice("q3", "b")
//!     .with_choice("q4", "a")
//!     .with_choices("q5", &["d", "a", "b"]);
//!
//! let report = grader.submit(&snapshot).unwrap();
//! assert_eq!(report.percentage, 100);
//! ```
//!
//! ```rust,no_run
//! use quiz_grader::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Run the built-in quiz in the terminal
//!     Quiz::builtin().run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod grader;
mod models;
pub mod present;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::{App, FieldState, FormState, Row};
pub use data::{
    load_quiz_from_json, validate_definition, web_server_quiz, DefinitionError, LoadError,
};
pub use grader::{GradeError, Grader, Scorer};
pub use models::{
    AnswerKey, AnswerRecord, AnswerValue, AppState, Choice, Expected, FormSnapshot, KeyEntry,
    Question, QuestionKind, QuestionLabels, QuestionResult, QuizDefinition, QuizPhase, RawField,
    ScoreReport,
};
pub use present::Presentation;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load quiz: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(definition: QuizDefinition) -> Self {
        Self {
            app: App::new(definition),
        }
    }

    /// The shipped web server technology quiz.
    pub fn builtin() -> Self {
        Self::new(web_server_quiz())
    }

    /// Load a quiz definition from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_grader::Quiz;
    ///
    /// let quiz = Quiz::from_json("quiz.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let definition = load_quiz_from_json(path)?;
        Ok(Self::new(definition))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz form, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::Form => handle_form_input(app, key),
        AppState::Results => handle_results_input(app, key.code),
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) -> bool {
    app.clear_notice();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('s') => app.submit(),
            KeyCode::Char('r') => app.reset(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Up => app.select_previous_row(),
        KeyCode::Down => app.select_next_row(),
        KeyCode::Tab => app.select_next_question(),
        KeyCode::BackTab => app.select_previous_question(),
        KeyCode::Enter if app.is_editing_text() => app.select_next_row(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) if app.is_editing_text() => app.type_char(c),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        _ => {}
    }

    false
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('b') | KeyCode::Esc => {
            app.show_form();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> bool {
        handle_input(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_flow_scores_and_resets() {
        let mut app = App::new(web_server_quiz());

        type_text(&mut app, "httpd");
        // q2: b
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        // q3: b
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        // q4: a
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        // q5: a, b, d
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        assert!(!ctrl(&mut app, 's'));
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.report().map(|r| r.percentage), Some(100));

        assert!(!press(&mut app, KeyCode::Char('r')));
        assert_eq!(app.phase(), QuizPhase::Unanswered);
        assert_eq!(app.state, AppState::Form);
    }

    #[test]
    fn test_incomplete_submit_keeps_form() {
        let mut app = App::new(web_server_quiz());
        ctrl(&mut app, 's');

        assert_eq!(app.state, AppState::Form);
        assert!(app.notice().is_some());

        press(&mut app, KeyCode::Down);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_q_types_into_text_box() {
        let mut app = App::new(web_server_quiz());
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.phase(), QuizPhase::Partial);
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_results_quit_and_back() {
        let mut app = App::new(web_server_quiz());
        app.state = AppState::Results;

        assert!(!press(&mut app, KeyCode::Char('b')));
        assert_eq!(app.state, AppState::Form);

        app.state = AppState::Results;
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
