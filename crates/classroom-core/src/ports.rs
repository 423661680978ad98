//! Ports between the view-state stores and the outside world.
//!
//! Futures are `?Send`: the browser `fetch` gateway is single-threaded.

use crate::GatewayError;
use async_trait::async_trait;
use classroom_types::{
    AssignRequest, Assignment, MessageResponse, NewTeacher, Teacher, TeacherSummary,
    TeacherUpdate,
};

/// Assignment API rooted at `{base}` (e.g. `/api/assignteacher`).
#[async_trait(?Send)]
pub trait AssignmentGateway {
    /// `GET {base}/teachers`
    async fn list_teachers(&self) -> Result<Vec<TeacherSummary>, GatewayError>;

    /// `GET {base}/assignments`
    async fn list_assignments(&self) -> Result<Vec<Assignment>, GatewayError>;

    /// `POST {base}/assign`
    async fn assign(&self, request: &AssignRequest) -> Result<MessageResponse, GatewayError>;

    /// `DELETE {base}/assignment/{id}`
    async fn remove_assignment(&self, id: i64) -> Result<MessageResponse, GatewayError>;
}

/// Teacher profile API rooted at `{base}` (e.g. `/api/teacher`).
#[async_trait(?Send)]
pub trait TeacherGateway {
    /// `GET {base}`
    async fn list_profiles(&self) -> Result<Vec<Teacher>, GatewayError>;

    /// `POST {base}`
    async fn create_profile(&self, teacher: &NewTeacher) -> Result<Teacher, GatewayError>;

    /// `PUT {base}/{id}`; the response body is ignored.
    async fn update_profile(&self, id: i64, update: &TeacherUpdate) -> Result<(), GatewayError>;

    /// `DELETE {base}/{id}`; the response body is ignored.
    async fn delete_profile(&self, id: i64) -> Result<(), GatewayError>;
}

/// User-facing prompts a renderer must provide.
pub trait Interaction {
    /// Ask a yes/no question. `false` aborts the pending destructive call.
    fn confirm(&self, prompt: &str) -> bool;

    /// Show a blocking acknowledgement.
    fn notify(&self, message: &str);
}
