//! # Route Modules
//!
//! Each module defines an Axum `Router<AppState>` for one API surface area.
//! Routers are merged in [`crate::app`].

pub mod assessments;
pub mod questionnaire;
pub mod sections;
