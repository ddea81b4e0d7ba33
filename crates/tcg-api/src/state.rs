//! # Application State
//!
//! Shared state for the Axum application. The only state is the two
//! catalogues, loaded once at startup and read-only afterwards; handlers
//! share them through `Arc`.
//!
//! ## Configuration
//!
//! | Variable             | Default   | Meaning                              |
//! |----------------------|-----------|--------------------------------------|
//! | `TCG_PORT`           | `8080`    | Port to bind                         |
//! | `TCG_QUESTIONS_PATH` | built-in  | Question catalogue file (YAML/JSON)  |
//! | `TCG_SECTIONS_PATH`  | built-in  | Section catalogue file (YAML/JSON)   |
//! | `TCG_LOG_FORMAT`     | `text`    | `json` for structured log lines      |

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use tcg_catalogue::{builtin, load_questions, load_sections, QuestionCatalogue, SectionCatalogue};
use tcg_core::CatalogueError;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Startup configuration failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// A catalogue failed to load or validate.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Question catalogue file. `None` uses the built-in catalogue.
    pub questions_path: Option<PathBuf>,
    /// Section catalogue file. `None` uses the built-in catalogue.
    pub sections_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            questions_path: None,
            sections_path: None,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("TCG_PORT") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "TCG_PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let log_format = match get("TCG_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "TCG_LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected \"text\" or \"json\"".to_string(),
                })
            }
        };

        Ok(Self {
            port,
            questions_path: get("TCG_QUESTIONS_PATH").map(PathBuf::from),
            sections_path: get("TCG_SECTIONS_PATH").map(PathBuf::from),
            log_format,
        })
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub questions: Arc<QuestionCatalogue>,
    pub sections: Arc<SectionCatalogue>,
}

impl AppState {
    pub fn new(questions: QuestionCatalogue, sections: SectionCatalogue) -> Self {
        Self {
            questions: Arc::new(questions),
            sections: Arc::new(sections),
        }
    }

    /// State backed by the built-in catalogue.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Ok(Self::new(builtin::questions()?, builtin::sections()?))
    }

    /// Load the catalogues named by `config`, falling back to the built-in
    /// catalogue for any path not set.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogueError> {
        let questions = match &config.questions_path {
            Some(path) => load_questions(path)?,
            None => builtin::questions()?,
        };
        let sections = match &config.sections_path {
            Some(path) => load_sections(path)?,
            None => builtin::sections()?,
        };
        tracing::info!(
            questions = questions.len(),
            sections = sections.len(),
            fingerprint = %questions.fingerprint(),
            "catalogues ready"
        );
        Ok(Self::new(questions, sections))
    }
}
