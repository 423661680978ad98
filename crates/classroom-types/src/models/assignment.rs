//! Teacher-to-class assignment model.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pairing of one teacher with one class label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Server-assigned identifier
    pub id: i64,
    pub teacher_id: i64,
    /// Denormalized display copy of the teacher's name
    pub teacher_name: String,
    pub class_name: String,
    /// Creation timestamp exactly as the server sent it
    pub created_at: String,
}

impl Assignment {
    /// Parsed creation time, if the server string is RFC 3339 or naive ISO-8601.
    ///
    /// Naive timestamps are taken as UTC.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.with_timezone(&Utc));
        }
        self.created_at
            .parse::<NaiveDateTime>()
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Creation time in local time for the "Assigned On" column.
    ///
    /// Falls back to the raw string when it cannot be parsed.
    pub fn assigned_on(&self) -> String {
        match self.created_at_utc() {
            Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.created_at.clone(),
        }
    }
}

/// Body for `POST {base}/assign`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub teacher_id: i64,
    pub class_name: String,
}

/// `{ "message": ... }` acknowledgement returned by mutating assignment calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Server message, or `default` when absent or blank.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
    }
}
