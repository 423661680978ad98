//! # Classroom Core
//!
//! View-state stores for the two administrative screens and the ports they
//! talk through.
//!
//! - [`AssignmentManager`] - teacher-to-class assignment screen
//! - [`ProfileManager`] - teacher profile screen
//! - [`AssignmentGateway`] / [`TeacherGateway`] - HTTP API ports
//! - [`Interaction`] - confirmation prompts and blocking acknowledgements
//!
//! Stores never return errors to their caller. Every failure is converted to
//! a display string held in the store's `error` field and logged through
//! `tracing`; the returned [`Outcome`] tells renderers what happened.

mod assignment;
mod error;
mod ports;
mod profile;

#[cfg(test)]
mod test_support;

pub use assignment::AssignmentManager;
pub use error::{GatewayError, Operation, Outcome};
pub use ports::{AssignmentGateway, Interaction, TeacherGateway};
pub use profile::{EditSession, ProfileManager};
