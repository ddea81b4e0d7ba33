//! # tcg-cli: Command-Line Interface
//!
//! Subcommand handlers for the `tcg` binary. Each module owns one
//! subcommand: its clap `Args` struct and a `run_*` handler that writes to
//! the supplied output and returns the process exit code.
//!
//! ## Subcommands
//!
//! - `validate`: load both catalogues and report counts and fingerprint.
//! - `questions`: print the questionnaire grouped by step.
//! - `sections`: print the section catalogue.
//! - `assess`: classify an answers file and resolve every section.
//!
//! Every subcommand accepts `--questions FILE` and `--sections FILE`; the
//! built-in catalogue is used for any file not given.

pub mod assess;
pub mod catalogue;
pub mod output;
pub mod questions;
pub mod sections;
pub mod validate;
