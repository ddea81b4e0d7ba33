//! # Validate Subcommand
//!
//! Loads both catalogues, which runs every authoring check, and reports
//! what was loaded. A broken catalogue surfaces as an error exit.

use std::io::Write;

use clap::Args;

use crate::catalogue::CatalogueArgs;

/// Arguments for the validate subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub catalogue: CatalogueArgs,
}

/// Run `tcg validate`.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let questions = args.catalogue.load_questions()?;
    let sections = args.catalogue.load_sections()?;

    tracing::info!(
        questions = questions.len(),
        sections = sections.len(),
        "catalogues validated"
    );

    writeln!(
        out,
        "questions: {} ({} questions in {} steps)",
        args.catalogue.questions_origin(),
        questions.len(),
        questions.steps().len()
    )?;
    writeln!(
        out,
        "sections:  {} ({} sections)",
        args.catalogue.sections_origin(),
        sections.len()
    )?;
    writeln!(out, "fingerprint: {}", questions.fingerprint())?;
    writeln!(out, "OK")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_builtin() {
        let mut out = Vec::new();
        let code = run_validate(&ValidateArgs::default(), &mut out).unwrap();
        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("built-in"));
        assert!(text.contains("fingerprint: sha256:"));
        assert!(text.ends_with("OK\n"));
    }

    #[test]
    fn test_validate_rejects_broken_sections_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(
            b"sections:\n  - slug: numbering\n    title: Numbering\n    category: numbering\n    applicableTo: []\n    baseline: REQUIRED\n",
        )
        .unwrap();
        let args = ValidateArgs {
            catalogue: CatalogueArgs {
                questions: None,
                sections: Some(file.path().to_path_buf()),
            },
        };
        let err = run_validate(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("applicable"), "{err:#}");
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            catalogue: CatalogueArgs {
                questions: Some(PathBuf::from("/nonexistent/questions.yaml")),
                sections: None,
            },
        };
        assert!(run_validate(&args, &mut Vec::new()).is_err());
    }
}
