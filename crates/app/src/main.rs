mod questions;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use quiz_core::Clock;
use quiz_core::model::{ChoiceMark, QuestionKind, QuizSession};
use ui::{QuestionOutcome, QuestionVm, SummaryVm};

use crate::questions::{load_question_file, sample_questions};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct Args {
    questions_path: Option<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions_path = std::env::var("QUIZ_QUESTIONS").ok().map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = args.next().ok_or(ArgsError::MissingValue {
                        flag: "--questions",
                    })?;
                    questions_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions_path })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path.json>]");
    eprintln!();
    eprintln!("Without --questions, the built-in sample set is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = match &args.questions_path {
        Some(path) => {
            let questions = load_question_file(path)?;
            log::info!("loaded {} questions from {}", questions.len(), path.display());
            questions
        }
        None => {
            log::debug!("no question file given, using the built-in sample set");
            sample_questions()
        }
    };

    let clock = Clock::default_clock();
    let session = QuizSession::new(questions, clock.now())?;
    run_quiz(session, &clock)
}

fn run_quiz(session: QuizSession, clock: &Clock) -> Result<(), Box<dyn std::error::Error>> {
    let mut vm = QuestionVm::new(session);
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        render_question(&vm)?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // stdin closed mid-quiz
            println!();
            return Ok(());
        }
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("n") || trimmed.eq_ignore_ascii_case("next") {
            if !vm.can_advance() {
                println!("Select a choice before moving on.");
                continue;
            }
            log::debug!("committing answer: {:?}", vm.progress());
            match vm.next(clock.now())? {
                QuestionOutcome::Continue => {}
                QuestionOutcome::Completed => break,
            }
        } else if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(());
        } else if let Ok(number) = trimmed.parse::<usize>() {
            let count = vm.choices().len();
            if (1..=count).contains(&number) {
                vm.toggle(number - 1);
            } else {
                println!("Pick a choice between 1 and {count}.");
            }
        } else {
            println!("Enter a choice number, 'n' for next, or 'q' to quit.");
        }
    }

    let summary = SummaryVm::new(vm.into_session())?;
    render_summary(&summary);
    Ok(())
}

fn render_question(vm: &QuestionVm) -> io::Result<()> {
    let progress = vm.progress();

    println!();
    println!("Question {} of {}", progress.answered + 1, progress.total);
    if let Some(prompt) = vm.prompt() {
        println!("{prompt}");
    }
    if vm.kind() == Some(QuestionKind::MultiChoice) {
        println!("(select all that apply)");
    }

    for (index, choice) in vm.choices().iter().enumerate() {
        let marker = if choice.selected { "[x]" } else { "[ ]" };
        println!("  {marker} {}. {}", index + 1, choice.label);
    }

    if vm.can_advance() {
        println!("Type a number to toggle, or 'n' for next.");
    } else {
        println!("Type a number to select a choice.");
    }
    print!("> ");
    io::stdout().flush()
}

fn render_summary(summary: &SummaryVm) {
    println!();
    println!("Score: {}", summary.score_line());
    if let Some(completed) = summary.completed_at_str() {
        println!("Completed {completed}");
    }

    for row in summary.rows() {
        println!();
        println!("{}", row.prompt);
        for (label, mark) in &row.choices {
            let marker = match mark {
                ChoiceMark::SelectedCorrect => "[+]",
                ChoiceMark::SelectedIncorrect => "[-]",
                ChoiceMark::Unmarked => "   ",
            };
            println!("  {marker} {label}");
        }
    }
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
