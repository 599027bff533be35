//! CLI integration tests using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn quiz_grader() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quiz-grader").unwrap()
}

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn grade_perfect_answers_as_text() {
    let answers = json_file(
        r#"{"q1": "CERN HTTPD", "q2": "b", "q3": "b", "q4": "a", "q5": ["d", "a", "b"]}"#,
    );

    quiz_grader()
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED!"))
        .stdout(predicate::str::contains("5 / 5"))
        .stdout(predicate::str::contains("Score: 100%"))
        .stdout(predicate::str::contains("Correct answer:").not());
}

#[test]
fn grade_reveals_only_missed_answers() {
    let answers = json_file(
        r#"{"q1": "cern http", "q2": "a", "q3": "b", "q4": "a", "q5": ["a", "b"]}"#,
    );

    quiz_grader()
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("2 / 5"))
        .stdout(predicate::str::contains("Score: 40%"))
        .stdout(predicate::str::contains("Correct answer: NCSA HTTPd"))
        .stdout(predicate::str::contains("Your answer: cern http"))
        .stdout(predicate::str::contains("Correct answer: Event-driven").not());
}

#[test]
fn grade_outputs_report_json() {
    let answers = json_file(
        r#"{"q1": "httpd", "q2": "b", "q3": "a", "q4": "a", "q5": ["a", "b", "d"]}"#,
    );

    let output = quiz_grader()
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_correct"], 4);
    assert_eq!(report["max_score"], 5);
    assert_eq!(report["percentage"], 80);
    assert_eq!(report["passed"], true);
    assert_eq!(report["questions"][2]["correct"], false);
}

#[test]
fn grade_incomplete_submission_exits_with_notice() {
    let answers = json_file(r#"{"q1": "   ", "q2": "b", "q3": "b", "q4": "a", "q5": []}"#);

    quiz_grader()
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Please answer all questions before submitting!",
        ))
        .stderr(predicate::str::contains("unanswered: 1, 5"));
}

#[test]
fn grade_with_custom_quiz() {
    let quiz = json_file(
        r#"{
            "title": "Rust basics",
            "pass_threshold": 50,
            "questions": [
                {"id": "owner", "prompt": "Who frees memory?", "type": "fill_in",
                 "answer": "the owner", "accepted": ["owner"]},
                {"id": "kw", "prompt": "Immutable binding keyword?", "type": "single_select",
                 "options": [{"id": "a", "label": "let"}, {"id": "b", "label": "mut"}],
                 "answer": "a"}
            ]
        }"#,
    );
    let answers = json_file(r#"{"owner": "Owner", "kw": "b"}"#);

    quiz_grader()
        .arg("--quiz")
        .arg(quiz.path())
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED!"))
        .stdout(predicate::str::contains("1 / 2"))
        .stdout(predicate::str::contains("Correct answer: let"));
}

#[test]
fn invalid_quiz_file_fails() {
    let quiz = json_file(r#"{"title": "Empty", "questions": []}"#);
    let answers = json_file("{}");

    quiz_grader()
        .arg("--quiz")
        .arg(quiz.path())
        .arg("grade")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one question"));
}

#[test]
fn key_prints_builtin_definition() {
    quiz_grader()
        .arg("key")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pass_threshold\": 60"))
        .stdout(predicate::str::contains("\"type\": \"multi_select\""));
}
