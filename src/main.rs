//! GuessRight console entry point.
//!
//! Loads configuration and the catalog, then runs quiz rounds on the
//! terminal: questions, match, feedback.

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use guessright::adapters::{
    FileCatalogSource, InMemoryProfileRepository, InMemoryQuestionRepository,
    InMemorySessionRepository,
};
use guessright::application::{
    AnalyzeFeedbackHandler, CompleteSessionCommand, CompleteSessionHandler,
    LearnFromFeedbackHandler, NextQuestion, NextQuestionHandler, NextQuestionQuery,
    RecordAnswerCommand, RecordAnswerHandler, SeedCatalogHandler, StartSessionCommand,
    StartSessionHandler, SubmitFeedbackCommand, SubmitFeedbackHandler, TerminationReason,
};
use guessright::config::AppConfig;
use guessright::domain::foundation::Answer;
use guessright::domain::matching::{MatchResolver, MatchResult, ProfileLearner};
use guessright::telemetry;

/// GuessRight - find your ideal customer profile in a few questions
#[derive(Parser)]
#[command(name = "guessright")]
#[command(version)]
#[command(about = "Adaptive yes/no/unsure questionnaire for customer profile matching")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run interactive quiz rounds (default)
    Quiz {
        /// Stop asking after this many questions
        #[arg(long)]
        max_questions: Option<usize>,

        /// Print the feedback analysis as JSON before exiting
        #[arg(long)]
        report: bool,
    },
    /// Load configuration and catalog, print what was found, and exit
    Check,
}

struct App {
    start: StartSessionHandler,
    next: NextQuestionHandler,
    record: RecordAnswerHandler,
    complete: CompleteSessionHandler,
    feedback: SubmitFeedbackHandler,
    analyze: AnalyzeFeedbackHandler,
}

struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `text` and reads one trimmed line; `None` on end of input.
    async fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        print!("{} ", text);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?.map(|l| l.trim().to_string()))
    }

    async fn confirm(&mut self, text: &str) -> std::io::Result<bool> {
        loop {
            match self.prompt(&format!("{} [y/n]", text)).await? {
                None => return Ok(false),
                Some(reply) => match reply.to_lowercase().as_str() {
                    "y" | "yes" => return Ok(true),
                    "n" | "no" => return Ok(false),
                    _ => println!("Please answer y or n."),
                },
            }
        }
    }

    async fn answer(&mut self, question: &str) -> std::io::Result<Option<Answer>> {
        loop {
            let Some(reply) = self.prompt(&format!("{} [y/n/u]", question)).await? else {
                return Ok(None);
            };
            let parsed = match reply.to_lowercase().as_str() {
                "y" => Ok(Answer::Yes),
                "n" => Ok(Answer::No),
                "u" | "?" => Ok(Answer::Unsure),
                other => other.parse::<Answer>(),
            };
            match parsed {
                Ok(answer) => return Ok(Some(answer)),
                Err(e) => println!("{}", e),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging);

    let profiles = Arc::new(InMemoryProfileRepository::new());
    let questions = Arc::new(InMemoryQuestionRepository::new());
    let sessions = Arc::new(InMemorySessionRepository::new());

    let source = Arc::new(FileCatalogSource::new(
        &config.catalog.data_dir,
        config.catalog.format,
    ));
    let seeded = SeedCatalogHandler::new(source, profiles.clone(), questions.clone())
        .handle()
        .await?;

    let app = App {
        start: StartSessionHandler::new(sessions.clone()),
        next: NextQuestionHandler::new(sessions.clone(), questions.clone(), profiles.clone()),
        record: RecordAnswerHandler::new(sessions.clone(), questions.clone()),
        complete: CompleteSessionHandler::new(
            sessions.clone(),
            profiles.clone(),
            MatchResolver::new(config.matching.match_settings()),
        ),
        feedback: SubmitFeedbackHandler::new(
            sessions.clone(),
            LearnFromFeedbackHandler::new(
                profiles.clone(),
                ProfileLearner::new(config.matching.learning_policy()),
            ),
        ),
        analyze: AnalyzeFeedbackHandler::new(sessions.clone(), questions.clone()),
    };

    match cli.command.unwrap_or(Commands::Quiz {
        max_questions: None,
        report: false,
    }) {
        Commands::Check => {
            println!(
                "Catalog at {}: {} profiles, {} questions",
                config.catalog.data_dir.display(),
                seeded.profiles,
                seeded.questions
            );
            Ok(())
        }
        Commands::Quiz {
            max_questions,
            report,
        } => {
            let mut console = Console::new();
            loop {
                run_round(&app, &mut console, max_questions).await?;
                if !console.confirm("Start another round?").await? {
                    break;
                }
            }
            if report {
                let report = app.analyze.handle().await?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
    }
}

async fn run_round(
    app: &App,
    console: &mut Console,
    max_questions: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let session = app.start.handle(StartSessionCommand::default()).await?;
    let session_id = *session.id();
    println!();

    loop {
        let query = NextQuestionQuery { session_id };
        let (question, number) = match app.next.handle(query).await? {
            NextQuestion::Ask {
                question,
                question_number,
            } => (question, question_number),
            NextQuestion::Terminated(TerminationReason::NoMoreQuestions)
            | NextQuestion::Terminated(TerminationReason::SessionAlreadyCompleted) => break,
        };
        if max_questions.is_some_and(|max| number > max) {
            break;
        }

        let prompt = format!("Q{}. {}", number, question.text());
        let Some(answer) = console.answer(&prompt).await? else {
            break;
        };
        app.record
            .handle(RecordAnswerCommand {
                session_id,
                question_id: question.id().clone(),
                answer,
            })
            .await?;
    }

    let completed = app
        .complete
        .handle(CompleteSessionCommand { session_id })
        .await?;
    print_result(&completed.result);

    if completed.result.profile.is_none() {
        return Ok(());
    }

    let is_correct = console.confirm("Is this your customer?").await?;
    let (suggested_profile, comments) = if is_correct {
        (None, String::new())
    } else {
        let suggestion = console
            .prompt("Which profile would fit better? (blank to skip)")
            .await?;
        let comments = console.prompt("Anything else? (blank to skip)").await?;
        (suggestion, comments.unwrap_or_default())
    };

    let submitted = app
        .feedback
        .handle(SubmitFeedbackCommand {
            session_id,
            is_correct,
            suggested_profile,
            comments,
        })
        .await?;
    if let Some(learning) = submitted.learning {
        for revision in &learning.revisions {
            println!(
                "Learned: profile now expects '{}' for {}",
                revision.revised, revision.question_id
            );
        }
    }
    println!("Thanks for the feedback!");
    Ok(())
}

fn print_result(result: &MatchResult) {
    println!();
    let Some(profile) = &result.profile else {
        println!("No matching profile found.");
        return;
    };

    println!(
        "Your customer: {} ({:.0}% confidence)",
        profile.name(),
        result.confidence * 100.0
    );
    if !profile.description().is_empty() {
        println!("  {}", profile.description());
    }
    for tip in profile.marketing_recommendations() {
        println!("  - {}", tip);
    }
    if !result.alternatives.is_empty() {
        println!("Also close:");
        for alternative in &result.alternatives {
            println!("  {} (score {:.1})", alternative.profile.name(), alternative.score);
        }
    }
    println!();
}
