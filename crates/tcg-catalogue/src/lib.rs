//! # tcg-catalogue: Question and Section Catalogues
//!
//! The two pieces of static configuration the assessment engine consumes:
//!
//! - **Question catalogue** (`questionnaire.rs`, `question.rs`): ordered
//!   questions grouped into wizard steps, each carrying its
//!   answer-to-business-type lookup table.
//!
//! - **Section catalogue** (`section.rs`): compliance guide sections with
//!   their applicable business types and baseline priority.
//!
//! Both are authored as data (YAML or JSON), validated once at load time by
//! `validation.rs`, and read-only afterwards. `builtin.rs` embeds the
//! default catalogue from `catalogue/` at the repository root.
//!
//! ## Crate Policy
//!
//! - Depends only on `tcg-core` internally.
//! - Validated catalogue types have private fields; the only constructors
//!   run the full validation.

pub mod builtin;
pub mod load;
pub mod question;
pub mod questionnaire;
pub mod section;
pub mod validation;

pub use load::{load_questions, load_sections, DocumentFormat};
pub use question::{AnswerOption, Question};
pub use questionnaire::{QuestionCatalogue, QuestionCatalogueDocument, WizardStep};
pub use section::{ComplianceSection, SectionCatalogue, SectionCatalogueDocument};
