//! Text buffer behind the teacher create and edit forms.

use super::{NewTeacher, Teacher, TeacherUpdate};
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Addressable field of a [`TeacherDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherField {
    Name,
    Email,
    Class,
    Attendance,
    Subject,
    Salary,
}

impl TeacherField {
    /// All fields in form order.
    pub const ALL: [TeacherField; 6] = [
        TeacherField::Name,
        TeacherField::Email,
        TeacherField::Class,
        TeacherField::Attendance,
        TeacherField::Subject,
        TeacherField::Salary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TeacherField::Name => "name",
            TeacherField::Email => "email",
            TeacherField::Class => "class",
            TeacherField::Attendance => "attendance",
            TeacherField::Subject => "subject",
            TeacherField::Salary => "salary",
        }
    }

    /// Column header / input label.
    pub const fn label(self) -> &'static str {
        match self {
            TeacherField::Name => "Name",
            TeacherField::Email => "Email",
            TeacherField::Class => "Class",
            TeacherField::Attendance => "Attendance",
            TeacherField::Subject => "Subject",
            TeacherField::Salary => "Salary",
        }
    }
}

impl fmt::Display for TeacherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form input for the six teacher fields. Salary stays text until submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    pub class: String,
    pub attendance: String,
    pub subject: String,
    pub salary: String,
}

impl TeacherDraft {
    /// Seed a draft with the current values of `teacher`.
    pub fn from_teacher(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            class: teacher.class.clone(),
            attendance: teacher.attendance.clone(),
            subject: teacher.subject.clone(),
            salary: teacher.salary.to_string(),
        }
    }

    pub fn get(&self, field: TeacherField) -> &str {
        match field {
            TeacherField::Name => &self.name,
            TeacherField::Email => &self.email,
            TeacherField::Class => &self.class,
            TeacherField::Attendance => &self.attendance,
            TeacherField::Subject => &self.subject,
            TeacherField::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: TeacherField, value: impl Into<String>) {
        let slot = match field {
            TeacherField::Name => &mut self.name,
            TeacherField::Email => &mut self.email,
            TeacherField::Class => &mut self.class,
            TeacherField::Attendance => &mut self.attendance,
            TeacherField::Subject => &mut self.subject,
            TeacherField::Salary => &mut self.salary,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace only, in form order.
    pub fn missing_fields(&self) -> Vec<TeacherField> {
        TeacherField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn parsed_salary(&self) -> Result<f64, ValidationError> {
        self.salary
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or_else(|| ValidationError::InvalidSalary { value: self.salary.clone() })
    }

    fn ensure_complete(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::IncompleteForm {
                missing: missing.iter().map(|f| f.as_str().to_string()).collect(),
            })
        }
    }

    /// Body for creating a teacher. Every field must be filled in.
    pub fn to_new_teacher(&self) -> Result<NewTeacher, ValidationError> {
        self.ensure_complete()?;
        Ok(NewTeacher {
            name: self.name.clone(),
            email: self.email.clone(),
            class: self.class.clone(),
            attendance: self.attendance.clone(),
            subject: self.subject.clone(),
            salary: self.parsed_salary()?,
        })
    }

    /// Body for replacing a teacher. Only the salary is checked.
    pub fn to_update(&self) -> Result<TeacherUpdate, ValidationError> {
        Ok(TeacherUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            class: self.class.clone(),
            attendance: self.attendance.clone(),
            subject: self.subject.clone(),
            salary: self.parsed_salary()?,
        })
    }
}
