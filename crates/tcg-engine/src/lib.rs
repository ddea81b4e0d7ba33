//! # tcg-engine: Assessment Rule Engine
//!
//! Turns questionnaire answers into a prioritized list of compliance
//! sections in two pure stages:
//!
//! 1. **Classifier** (`classifier.rs`): answers → business types, by
//!    looking each selected value up in its question's table.
//!
//! 2. **Resolver** (`resolver.rs`): business types → one priority per
//!    section, by intersecting with each section's applicability list.
//!
//! `assessment.rs` composes the two and records the questionnaire
//! fingerprint. `answers.rs` defines the answer set handed in by the wizard.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared mutable state. Every function is deterministic in
//!   its arguments and safe to call concurrently.
//! - Structural errors in the answers fail the whole evaluation with
//!   `AssessmentError`; they are never coerced.

pub mod answers;
pub mod assessment;
pub mod classifier;
pub mod resolver;

pub use answers::{AnswerValue, AssessmentAnswers};
pub use assessment::{assess, assess_with_trace, AssessmentResult};
pub use classifier::{classify, classify_with_trace, Classification, Contribution};
pub use resolver::{resolve, resolve_section, SectionResult};
