//! # Questions Subcommand
//!
//! Prints the questionnaire grouped by wizard step, with each option's
//! business-type mapping.

use std::io::Write;

use clap::Args;

use tcg_catalogue::{Question, QuestionCatalogue};
use tcg_core::{BusinessType, InputKind};

use crate::catalogue::CatalogueArgs;
use crate::output::{write_json, OutputFormat};

/// Arguments for the questions subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub catalogue: CatalogueArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run `tcg questions`.
pub fn run_questions(args: &QuestionsArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let catalogue = args.catalogue.load_questions()?;
    match args.format {
        OutputFormat::Json => write_json(out, &catalogue)?,
        OutputFormat::Text => write_text(&catalogue, out)?,
    }
    Ok(0)
}

fn write_text(catalogue: &QuestionCatalogue, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "Questionnaire {}", catalogue.fingerprint())?;
    for step in catalogue.steps() {
        writeln!(out)?;
        writeln!(out, "Step {}: {}", step.index + 1, step.title)?;
        for question in catalogue.questions_for_step(step.index) {
            write_question(question, out)?;
        }
    }
    Ok(())
}

fn write_question(question: &Question, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "  [{}] {} ({})", question.id, question.prompt, question.input)?;
    if question.input == InputKind::Boolean && question.options.is_empty() {
        for value in question.option_values() {
            writeln!(out, "      {value:<20} -> {}", mapping(question, value))?;
        }
        return Ok(());
    }
    for option in &question.options {
        writeln!(
            out,
            "      {:<20} -> {}",
            option.value,
            mapping(question, &option.value)
        )?;
    }
    Ok(())
}

fn mapping(question: &Question, value: &str) -> String {
    match question.business_types_for(value) {
        Some([]) | None => "-".to_string(),
        Some(types) => types
            .iter()
            .map(BusinessType::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
