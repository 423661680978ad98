//! Domain models and wire bodies.

mod assignment;
mod class_name;
mod draft;
mod teacher;

pub use assignment::{AssignRequest, Assignment, MessageResponse};
pub use class_name::ClassName;
pub use draft::{TeacherDraft, TeacherField};
pub use teacher::{NewTeacher, Teacher, TeacherSummary, TeacherUpdate};
