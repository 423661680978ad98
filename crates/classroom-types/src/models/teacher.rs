//! Teacher profile model and related request bodies.

use serde::{Deserialize, Serialize};

/// Full teacher record as served by the teacher collection root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Home class label
    pub class: String,
    /// Attendance as entered by staff (free text)
    pub attendance: String,
    pub subject: String,
    pub salary: f64,
}

impl Teacher {
    /// Overwrite every mutable field with the values of `update`.
    ///
    /// The identifier is never touched.
    pub fn apply(&mut self, update: &TeacherUpdate) {
        self.name.clone_from(&update.name);
        self.email.clone_from(&update.email);
        self.class.clone_from(&update.class);
        self.attendance.clone_from(&update.attendance);
        self.subject.clone_from(&update.subject);
        self.salary = update.salary;
    }
}

/// Teacher entry used to populate the assignment selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subject: String,
}

impl TeacherSummary {
    /// Label shown in the selector: `"name - subject"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.subject)
    }
}

/// Body for `POST {base}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub class: String,
    pub attendance: String,
    pub subject: String,
    pub salary: f64,
}

/// Body for `PUT {base}/{id}`: full replacement of the mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUpdate {
    pub name: String,
    pub email: String,
    pub class: String,
    pub attendance: String,
    pub subject: String,
    pub salary: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn teacher() -> Teacher {
        Teacher {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@school.test".to_string(),
            class: "Class 2".to_string(),
            attendance: "98%".to_string(),
            subject: "Math".to_string(),
            salary: 4200.0,
        }
    }

    #[test]
    fn test_teacher_deserializes_backend_shape() {
        let json = r#"{"id":7,"name":"Ada","email":"ada@school.test","class":"Class 2",
            "attendance":"98%","subject":"Math","salary":4200}"#;
        let parsed: Teacher = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, teacher());
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let mut t = teacher();
        t.apply(&TeacherUpdate {
            name: "Grace".to_string(),
            email: "grace@school.test".to_string(),
            class: "Class 3".to_string(),
            attendance: "90%".to_string(),
            subject: "CS".to_string(),
            salary: 5000.5,
        });
        assert_eq!(t.id, 7);
        assert_eq!(t.name, "Grace");
        assert_eq!(t.salary, 5000.5);
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let json = r#"{"id":3,"name":"Lin","subject":"Art","email":"x@y"}"#;
        let summary: TeacherSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.label(), "Lin - Art");
    }
}
