//! # Classroom Types
//!
//! Core types, models, and validation errors for Classroom Admin.
//!
//! - **`error`** - Local validation errors raised before any network call
//! - **`models`** - Domain models (Teacher, Assignment) and request/response bodies
//!
//! ## Architecture Role
//!
//! `classroom-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                classroom-types (this crate)
//!                        │
//!                        ▼
//!                 classroom-core
//!                        │
//!       ┌────────────────┼────────────────┐
//!       ▼                ▼                ▼
//! classroom-client  classroom-leptos  classroom-cli
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde, matching the backend's camelCase JSON
//! - **Clone** so view-state can be snapshotted into reactive signals
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

pub use error::ValidationError;

pub use models::{
    AssignRequest, Assignment, ClassName, MessageResponse, NewTeacher, Teacher, TeacherDraft,
    TeacherField, TeacherSummary, TeacherUpdate,
};
