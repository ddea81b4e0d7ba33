//! # Catalogue Selection
//!
//! Shared `--questions` / `--sections` flags and the loaders behind them.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use tcg_catalogue::{builtin, load_questions, load_sections, QuestionCatalogue, SectionCatalogue};

/// Catalogue file overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogueArgs {
    /// Question catalogue file (YAML or JSON). Defaults to the built-in one.
    #[arg(long, value_name = "FILE")]
    pub questions: Option<PathBuf>,

    /// Section catalogue file (YAML or JSON). Defaults to the built-in one.
    #[arg(long, value_name = "FILE")]
    pub sections: Option<PathBuf>,
}

impl CatalogueArgs {
    pub fn load_questions(&self) -> anyhow::Result<QuestionCatalogue> {
        match &self.questions {
            Some(path) => load_questions(path)
                .with_context(|| format!("loading question catalogue {}", path.display())),
            None => builtin::questions().context("loading built-in question catalogue"),
        }
    }

    pub fn load_sections(&self) -> anyhow::Result<SectionCatalogue> {
        match &self.sections {
            Some(path) => load_sections(path)
                .with_context(|| format!("loading section catalogue {}", path.display())),
            None => builtin::sections().context("loading built-in section catalogue"),
        }
    }

    /// Where the question catalogue comes from, for display.
    pub fn questions_origin(&self) -> String {
        origin(&self.questions)
    }

    /// Where the section catalogue comes from, for display.
    pub fn sections_origin(&self) -> String {
        origin(&self.sections)
    }
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}
