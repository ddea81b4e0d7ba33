//! # tcg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tcg_cli::assess::{run_assess, AssessArgs};
use tcg_cli::questions::{run_questions, QuestionsArgs};
use tcg_cli::sections::{run_sections, SectionsArgs};
use tcg_cli::validate::{run_validate, ValidateArgs};

/// Telecom compliance guide CLI.
///
/// Validates and inspects the question and section catalogues, and runs
/// assessments over a file of questionnaire answers.
#[derive(Parser, Debug)]
#[command(name = "tcg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and validate the question and section catalogues.
    Validate(ValidateArgs),

    /// Print the questionnaire grouped by step.
    Questions(QuestionsArgs),

    /// Print the compliance-section catalogue.
    Sections(SectionsArgs),

    /// Assess a file of answers and print per-section priorities.
    Assess(AssessArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &mut out),
        Commands::Questions(args) => run_questions(&args, &mut out),
        Commands::Sections(args) => run_sections(&args, &mut out),
        Commands::Assess(args) => run_assess(&args, &mut out),
    };

    match result.and_then(|code| out.flush().map(|_| code).map_err(Into::into)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
