//! # tcg-core: Foundational Types for the Assessment Engine
//!
//! Leaf crate of the workspace. Defines the closed vocabularies the rule
//! engine reasons over, the identifier newtypes, the error hierarchy, and the
//! canonical-bytes → SHA-256 pipeline used to fingerprint catalogues.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums over free strings.** `BusinessType`, `PriorityLevel`,
//!    `SectionSlug`, `SectionCategory` and `InputKind` are exhaustive enums.
//!    Adding a variant is a compile error until every `match` handles it.
//!
//! 2. **Newtype identifiers.** `QuestionId` has a validated constructor; no
//!    bare strings travel through the engine as question keys.
//!
//! 3. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`. `sha256_digest()` accepts nothing else.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tcg-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod business_type;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod input;
pub mod priority;
pub mod section;

pub use business_type::{BusinessType, BUSINESS_TYPE_COUNT};
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::{AssessmentError, CanonicalizationError, CatalogueError, TcgError};
pub use identity::QuestionId;
pub use input::InputKind;
pub use priority::PriorityLevel;
pub use section::{SectionCategory, SectionSlug};
