use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use quiz_grader::{
    load_quiz_from_json, web_server_quiz, FormSnapshot, GradeError, Grader, Presentation, Quiz,
    QuizDefinition, QuizError,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "quiz_grader=info";

#[derive(Parser, Debug)]
#[command(version, about = "Grade a short fixed-form quiz", long_about = None)]
struct Args {
    /// JSON file to load the quiz from (defaults to the built-in quiz)
    #[arg(short, long, global = true)]
    quiz: Option<PathBuf>,

    /// Write logs to this file while the terminal form is open
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grade a JSON answer snapshot without opening the form
    Grade {
        /// JSON object mapping question ids to answers
        #[arg(short, long)]
        answers: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the quiz definition as JSON
    Key,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        None => run_form(args.quiz.as_deref(), args.log_file.as_deref()),
        Some(Command::Grade { answers, format }) => {
            init_stderr_logging();
            grade(args.quiz.as_deref(), &answers, format)
        }
        Some(Command::Key) => print_key(args.quiz.as_deref()),
    };

    match result {
        Ok(()) => {}
        Err(QuizError::Grade(err @ GradeError::IncompleteSubmission { .. })) => {
            eprintln!("{}", err);
            process::exit(2);
        }
        Err(e) => {
            error!(error = %e, "quiz-grader failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn load_definition(path: Option<&Path>) -> Result<QuizDefinition, QuizError> {
    match path {
        Some(path) => Ok(load_quiz_from_json(path)?),
        None => Ok(web_server_quiz()),
    }
}

fn run_form(quiz: Option<&Path>, log_file: Option<&Path>) -> Result<(), QuizError> {
    // The alternate screen owns stdout and stderr, so logs only go to a file.
    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    Quiz::new(load_definition(quiz)?).run()
}

fn grade(quiz: Option<&Path>, answers: &Path, format: Format) -> Result<(), QuizError> {
    let definition = load_definition(quiz)?;
    let snapshot = read_snapshot(answers)?;
    let report = Grader::from_definition(&definition).submit(&snapshot)?;

    match format {
        Format::Text => print!("{}", Presentation::from_report(&report)),
        Format::Json => println!("{}", to_json(&report)?),
    }

    Ok(())
}

fn read_snapshot(path: &Path) -> Result<FormSnapshot, QuizError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_key(quiz: Option<&Path>) -> Result<(), QuizError> {
    let definition = load_definition(quiz)?;
    println!("{}", to_json(&definition)?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, QuizError> {
    Ok(serde_json::to_string_pretty(value)?)
}
