use std::collections::BTreeSet;

use crate::models::{Choice, Question, QuestionKind, QuizDefinition};

/// The shipped five-question web server technology quiz.
pub fn web_server_quiz() -> QuizDefinition {
    QuizDefinition {
        title: "Web Server Technology Quiz".to_string(),
        pass_threshold: 60,
        questions: vec![
            Question {
                id: "q1".to_string(),
                prompt: "The first web server, written by Tim Berners-Lee in 1990, was called ______."
                    .to_string(),
                kind: QuestionKind::FillIn {
                    answer: "cern httpd".to_string(),
                    accepted: vec!["cern".to_string(), "httpd".to_string()],
                    display: Some("CERN httpd".to_string()),
                },
            },
            Question {
                id: "q2".to_string(),
                prompt: "Which web server did the original Apache HTTP Server grow out of?"
                    .to_string(),
                kind: QuestionKind::SingleSelect {
                    options: vec![
                        Choice::new("a", "CERN httpd"),
                        Choice::new("b", "NCSA HTTPd"),
                        Choice::new("c", "Apache HTTP Server"),
                        Choice::new("d", "Nginx"),
                    ],
                    answer: "b".to_string(),
                    display: None,
                },
            },
            Question {
                id: "q3".to_string(),
                prompt: "What lets Nginx handle large numbers of concurrent connections efficiently?"
                    .to_string(),
                kind: QuestionKind::SingleSelect {
                    options: vec![
                        Choice::new("a", "Better static file serving"),
                        Choice::new("b", "Event-driven, asynchronous architecture"),
                        Choice::new("c", "Open source licensing"),
                        Choice::new("d", "Modular plugin system"),
                    ],
                    answer: "b".to_string(),
                    display: None,
                },
            },
            Question {
                id: "q4".to_string(),
                prompt: "What does the LAMP stack stand for?".to_string(),
                kind: QuestionKind::SingleSelect {
                    options: vec![
                        Choice::new("a", "Linux, Apache, MySQL, PHP/Perl/Python"),
                        Choice::new("b", "Local, Application, Memory, Protocol"),
                        Choice::new("c", "Load, Apache, Modular, Performance"),
                        Choice::new("d", "Linux, Authentication, Messaging, Processing"),
                    ],
                    answer: "a".to_string(),
                    display: None,
                },
            },
            Question {
                id: "q5".to_string(),
                prompt: "Which of these are features of the Apache HTTP Server? (select all that apply)"
                    .to_string(),
                kind: QuestionKind::MultiSelect {
                    options: vec![
                        Choice::new("a", "Modular architecture"),
                        Choice::new("b", ".htaccess configuration files"),
                        Choice::new("c", "Event-driven architecture"),
                        Choice::new("d", "Virtual hosting support"),
                        Choice::new("e", "Built-in load balancing"),
                    ],
                    answers: BTreeSet::from(["a".to_string(), "b".to_string(), "d".to_string()]),
                    display: Some(
                        "Modular architecture, .htaccess configuration files, and Virtual hosting support"
                            .to_string(),
                    ),
                },
            },
        ],
    }
}
