//! # Assess Subcommand
//!
//! Reads an answers file, runs classification and resolution, and prints
//! the per-section priorities.
//!
//! The answers file is a JSON or YAML object keyed by question id, chosen
//! by extension. `-` reads JSON from standard input.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use serde::Serialize;

use tcg_catalogue::{DocumentFormat, SectionCatalogue};
use tcg_core::{BusinessType, PriorityLevel};
use tcg_engine::{assess, AssessmentAnswers, AssessmentResult, SectionResult};

use crate::catalogue::CatalogueArgs;
use crate::output::{write_json, OutputFormat};

/// Arguments for the assess subcommand.
#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub catalogue: CatalogueArgs,

    /// Answers file (JSON or YAML), or `-` for JSON on stdin.
    #[arg(long, value_name = "FILE")]
    pub answers: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List sections most urgent first instead of in catalogue order.
    #[arg(long)]
    pub by_priority: bool,

    /// Omit NOT_APPLICABLE sections from the listing.
    #[arg(long)]
    pub applicable_only: bool,
}

/// Run `tcg assess`.
pub fn run_assess(args: &AssessArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let questions = args.catalogue.load_questions()?;
    let sections = args.catalogue.load_sections()?;
    let answers = read_answers(&args.answers)?;

    let unanswered = answers.unanswered(&questions);
    if !unanswered.is_empty() {
        tracing::info!(
            unanswered = unanswered.len(),
            "assessing a partial answer set"
        );
    }

    let result = assess(&questions, &sections, &answers)
        .with_context(|| format!("assessing {}", args.answers.display()))?;

    let listed: Vec<&SectionResult> = if args.by_priority {
        result.by_priority()
    } else {
        result.sections.iter().collect()
    };
    let listed: Vec<&SectionResult> = listed
        .into_iter()
        .filter(|r| !args.applicable_only || r.is_applicable())
        .collect();

    match args.format {
        OutputFormat::Json => write_json(out, &JsonReport::new(&result, &listed))?,
        OutputFormat::Text => write_text(&result, &listed, &sections, out)?,
    }
    Ok(0)
}

/// Read an answers file, picking the parser by extension.
pub fn read_answers(path: &Path) -> anyhow::Result<AssessmentAnswers> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading answers from stdin")?;
        return serde_json::from_str(&text).context("parsing answers from stdin");
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading answers file {}", path.display()))?;
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Json) => serde_json::from_str(&text)
            .with_context(|| format!("parsing answers file {}", path.display())),
        Some(DocumentFormat::Yaml) => serde_yaml::from_str(&text)
            .with_context(|| format!("parsing answers file {}", path.display())),
        None => bail!(
            "unsupported answers file {}: expected .json, .yaml or .yml",
            path.display()
        ),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    business_types: &'a [BusinessType],
    questionnaire_fingerprint: &'a str,
    sections: &'a [&'a SectionResult],
    counts: BTreeMap<PriorityLevel, usize>,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a AssessmentResult, listed: &'a [&'a SectionResult]) -> Self {
        Self {
            business_types: &result.business_types,
            questionnaire_fingerprint: &result.questionnaire_fingerprint,
            sections: listed,
            counts: result.counts(),
        }
    }
}

fn write_text(
    result: &AssessmentResult,
    listed: &[&SectionResult],
    sections: &SectionCatalogue,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let types: Vec<&str> = result.business_types.iter().map(BusinessType::label).collect();
    writeln!(out, "Questionnaire:  sha256:{}", result.questionnaire_fingerprint)?;
    if types.is_empty() {
        writeln!(out, "Business types: none inferred")?;
    } else {
        writeln!(out, "Business types: {}", types.join(", "))?;
    }
    writeln!(out)?;

    for entry in listed {
        let title = sections
            .get(entry.slug)
            .map(|s| s.title.as_str())
            .unwrap_or_default();
        writeln!(
            out,
            "{:<20} {:<28} {}",
            entry.priority.as_str(),
            entry.slug.as_str(),
            title
        )?;
    }

    let summary: Vec<String> = result
        .counts()
        .into_iter()
        .rev()
        .map(|(level, n)| format!("{n} {}", level.label().to_lowercase()))
        .collect();
    writeln!(out)?;
    writeln!(out, "Summary: {}", summary.join(", "))?;
    Ok(())
}
