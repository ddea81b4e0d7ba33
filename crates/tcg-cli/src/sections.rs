//! # Sections Subcommand
//!
//! Prints the compliance-section catalogue in published order.

use std::io::Write;

use clap::Args;

use tcg_core::BusinessType;

use crate::catalogue::CatalogueArgs;
use crate::output::{write_json, OutputFormat};

/// Arguments for the sections subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SectionsArgs {
    #[command(flatten)]
    pub catalogue: CatalogueArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run `tcg sections`.
pub fn run_sections(args: &SectionsArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let catalogue = args.catalogue.load_sections()?;
    match args.format {
        OutputFormat::Json => write_json(out, &catalogue.sections())?,
        OutputFormat::Text => {
            for section in catalogue.sections() {
                writeln!(
                    out,
                    "{:<28} {:<20} {}",
                    section.slug.as_str(),
                    section.baseline.as_str(),
                    section.title
                )?;
                let applies: Vec<&str> =
                    section.applicable_to.iter().map(BusinessType::as_str).collect();
                writeln!(out, "    applies to: {}", applies.join(", "))?;
            }
        }
    }
    Ok(0)
}
