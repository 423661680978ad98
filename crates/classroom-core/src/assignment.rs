//! View-state for the teacher-to-class assignment screen.

use crate::{AssignmentGateway, GatewayError, Interaction, Operation, Outcome};
use classroom_types::{
    AssignRequest, Assignment, ClassName, MessageResponse, TeacherSummary, ValidationError,
};

const ASSIGNED: &str = "Teacher assigned successfully";
const REMOVED: &str = "Assignment removed";
const CONFIRM_REMOVE: &str = "Are you sure you want to remove this assignment?";

/// Lists, selections and status of the assignment screen.
///
/// The assignment table is never patched locally; every successful mutation
/// re-fetches it from the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentManager {
    teachers: Vec<TeacherSummary>,
    assignments: Vec<Assignment>,
    selected_teacher: String,
    selected_class: String,
    loading: bool,
    error: Option<String>,
}

impl AssignmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teachers(&self) -> &[TeacherSummary] {
        &self.teachers
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn selected_teacher(&self) -> &str {
        &self.selected_teacher
    }

    pub fn selected_class(&self) -> &str {
        &self.selected_class
    }

    /// `true` while an assign request is in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_teacher(&mut self, value: impl Into<String>) {
        self.selected_teacher = value.into();
    }

    pub fn select_class(&mut self, value: impl Into<String>) {
        self.selected_class = value.into();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Turn the current selections into a request body.
    pub fn selection_request(&self) -> Result<AssignRequest, ValidationError> {
        let teacher = self.selected_teacher.trim();
        let class = self.selected_class.trim();
        if teacher.is_empty() || class.is_empty() {
            return Err(ValidationError::MissingSelection);
        }
        let teacher_id = teacher
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidTeacherId { value: teacher.to_string() })?;
        let class_name: ClassName = class.parse()?;
        Ok(AssignRequest { teacher_id, class_name: class_name.to_string() })
    }

    /// Initial load: teachers, then assignments.
    ///
    /// The error is cleared once up front, so a failure of either list stays
    /// visible after the other one succeeds.
    pub async fn load<G>(&mut self, gateway: &G)
    where
        G: AssignmentGateway + ?Sized,
    {
        self.error = None;
        let teachers = gateway.list_teachers().await;
        self.finish_fetch_teachers(teachers);
        let assignments = gateway.list_assignments().await;
        self.finish_fetch_assignments(assignments);
    }

    pub async fn fetch_teachers<G>(&mut self, gateway: &G) -> Outcome
    where
        G: AssignmentGateway + ?Sized,
    {
        self.error = None;
        let result = gateway.list_teachers().await;
        self.finish_fetch_teachers(result)
    }

    pub fn finish_fetch_teachers(
        &mut self,
        result: Result<Vec<TeacherSummary>, GatewayError>,
    ) -> Outcome {
        match result {
            Ok(teachers) => {
                tracing::debug!("Loaded {} teachers", teachers.len());
                self.teachers = teachers;
                Outcome::Done
            }
            Err(e) => self.fail(Operation::FetchTeachers, e),
        }
    }

    pub async fn fetch_assignments<G>(&mut self, gateway: &G) -> Outcome
    where
        G: AssignmentGateway + ?Sized,
    {
        self.error = None;
        let result = gateway.list_assignments().await;
        self.finish_fetch_assignments(result)
    }

    pub fn finish_fetch_assignments(
        &mut self,
        result: Result<Vec<Assignment>, GatewayError>,
    ) -> Outcome {
        match result {
            Ok(assignments) => {
                tracing::debug!("Loaded {} assignments", assignments.len());
                self.assignments = assignments;
                Outcome::Done
            }
            Err(e) => self.fail(Operation::FetchAssignments, e),
        }
    }

    /// Validate the selections and enter the in-flight state.
    ///
    /// On `Err` nothing may be sent; the outcome is already recorded.
    /// A second call while the first request is in flight yields
    /// [`Outcome::Busy`] and leaves the state alone.
    pub fn begin_assign(&mut self) -> Result<AssignRequest, Outcome> {
        if self.loading {
            return Err(Outcome::Busy);
        }
        if self.selected_teacher.trim().is_empty() || self.selected_class.trim().is_empty() {
            return Err(self.reject(ValidationError::MissingSelection));
        }

        self.loading = true;
        self.error = None;

        self.selection_request().map_err(|e| {
            self.loading = false;
            self.reject(e)
        })
    }

    /// Apply the response to an assign request.
    ///
    /// On success the server message is acknowledged and both selections are
    /// cleared; the caller then re-fetches the assignment list.
    pub fn finish_assign<I>(
        &mut self,
        request: &AssignRequest,
        result: Result<MessageResponse, GatewayError>,
        ui: &I,
    ) -> Outcome
    where
        I: Interaction + ?Sized,
    {
        self.loading = false;
        match result {
            Ok(response) => {
                tracing::info!(
                    "Assigned teacher {} to {}",
                    request.teacher_id,
                    request.class_name
                );
                ui.notify(response.message_or(ASSIGNED));
                self.selected_teacher.clear();
                self.selected_class.clear();
                Outcome::Done
            }
            Err(e) => self.fail(Operation::Assign, e),
        }
    }

    /// Submit the selected teacher/class pairing, then re-fetch the list once.
    pub async fn assign<G, I>(&mut self, gateway: &G, ui: &I) -> Outcome
    where
        G: AssignmentGateway + ?Sized,
        I: Interaction + ?Sized,
    {
        let request = match self.begin_assign() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = gateway.assign(&request).await;
        let outcome = self.finish_assign(&request, result, ui);
        if outcome.is_done() {
            self.fetch_assignments(gateway).await;
        }
        outcome
    }

    /// Question to put to the user before removing an assignment.
    pub const fn remove_prompt() -> &'static str {
        CONFIRM_REMOVE
    }

    /// Apply the response to a removal; the caller re-fetches on success.
    pub fn finish_remove<I>(
        &mut self,
        id: i64,
        result: Result<MessageResponse, GatewayError>,
        ui: &I,
    ) -> Outcome
    where
        I: Interaction + ?Sized,
    {
        match result {
            Ok(response) => {
                tracing::info!("Removed assignment {}", id);
                ui.notify(response.message_or(REMOVED));
                Outcome::Done
            }
            Err(e) => self.fail(Operation::RemoveAssignment, e),
        }
    }

    /// Remove one assignment after the user confirms.
    pub async fn remove_assignment<G, I>(&mut self, id: i64, gateway: &G, ui: &I) -> Outcome
    where
        G: AssignmentGateway + ?Sized,
        I: Interaction + ?Sized,
    {
        if !ui.confirm(CONFIRM_REMOVE) {
            return Outcome::Cancelled;
        }

        self.error = None;
        let result = gateway.remove_assignment(id).await;
        let outcome = self.finish_remove(id, result, ui);
        if outcome.is_done() {
            self.fetch_assignments(gateway).await;
        }
        outcome
    }

    fn reject(&mut self, error: ValidationError) -> Outcome {
        tracing::warn!("Rejected assignment: {}", error);
        self.error = Some(error.to_string());
        Outcome::Invalid(error)
    }

    fn fail(&mut self, operation: Operation, error: GatewayError) -> Outcome {
        tracing::error!("Failed to {}: {}", operation, error);
        self.error = Some(error.user_message(operation));
        Outcome::Failed(error)
    }
}
