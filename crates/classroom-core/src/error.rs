//! Gateway failures, per-operation fallback messages and operation outcomes.

use classroom_types::ValidationError;
use std::fmt;
use thiserror::Error;

/// Failure of a single request issued through a gateway port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, if present.
        message: Option<String>,
    },

    /// Success status but the body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Server { message: Some(m), .. } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }

    /// Most specific message for the user: the server's own, else the
    /// operation's fallback.
    pub fn user_message(&self, operation: Operation) -> String {
        self.server_message()
            .unwrap_or_else(|| operation.fallback_message())
            .to_string()
    }
}

/// Every network-backed operation the two screens perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchTeachers,
    FetchAssignments,
    Assign,
    RemoveAssignment,
    FetchProfiles,
    CreateTeacher,
    UpdateTeacher,
    DeleteTeacher,
}

impl Operation {
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Operation::FetchTeachers | Operation::FetchProfiles => "Error fetching teachers",
            Operation::FetchAssignments => "Error fetching assignments",
            Operation::Assign => "Error assigning teacher",
            Operation::RemoveAssignment => "Error removing assignment",
            Operation::CreateTeacher => "Error adding teacher",
            Operation::UpdateTeacher => "Error updating teacher",
            Operation::DeleteTeacher => "Error deleting teacher",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FetchTeachers => "fetch teachers",
            Operation::FetchAssignments => "fetch assignments",
            Operation::Assign => "assign teacher",
            Operation::RemoveAssignment => "remove assignment",
            Operation::FetchProfiles => "fetch teacher profiles",
            Operation::CreateTeacher => "add teacher",
            Operation::UpdateTeacher => "update teacher",
            Operation::DeleteTeacher => "delete teacher",
        };
        f.write_str(name)
    }
}

/// What a store operation ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Request succeeded and local state was updated.
    Done,
    /// Rejected locally; no request was made.
    Invalid(ValidationError),
    /// User declined the confirmation prompt; no request was made.
    Cancelled,
    /// A submission is already in flight; no request was made.
    Busy,
    /// Request was made and failed.
    Failed(GatewayError),
}

impl Outcome {
    pub const fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}
