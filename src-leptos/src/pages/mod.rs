//! Page components

mod assign_teacher;
mod teacher_profiles;

pub use assign_teacher::AssignTeacher;
pub use teacher_profiles::TeacherProfiles;
