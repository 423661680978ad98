//! View-state for the teacher profile screen.

use crate::{GatewayError, Interaction, Operation, Outcome, TeacherGateway};
use classroom_types::{
    NewTeacher, Teacher, TeacherDraft, TeacherField, TeacherUpdate, ValidationError,
};

const CONFIRM_DELETE: &str = "Are you sure you want to delete this teacher?";

/// In-place edit of a single teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: i64,
    pub draft: TeacherDraft,
}

/// Teacher list, edit buffer and creation form.
///
/// Unlike the assignment screen, successful mutations patch the local list
/// instead of re-fetching it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileManager {
    teachers: Vec<Teacher>,
    editing: Option<EditSession>,
    new_teacher: TeacherDraft,
    create_form_open: bool,
    error: Option<String>,
}

impl ProfileManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|s| s.id == id)
    }

    pub fn new_teacher(&self) -> &TeacherDraft {
        &self.new_teacher
    }

    pub const fn is_create_form_open(&self) -> bool {
        self.create_form_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub async fn fetch_teachers<G>(&mut self, gateway: &G) -> Outcome
    where
        G: TeacherGateway + ?Sized,
    {
        self.error = None;
        let result = gateway.list_profiles().await;
        self.finish_fetch_teachers(result)
    }

    pub fn finish_fetch_teachers(
        &mut self,
        result: Result<Vec<Teacher>, GatewayError>,
    ) -> Outcome {
        match result {
            Ok(teachers) => {
                tracing::debug!("Loaded {} teacher profiles", teachers.len());
                self.teachers = teachers;
                Outcome::Done
            }
            Err(e) => self.fail(Operation::FetchProfiles, e),
        }
    }

    /// Copy one teacher into the edit buffer, replacing any edit in progress.
    ///
    /// Returns `false` if no teacher has that identifier.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.teachers.iter().find(|t| t.id == id) {
            Some(teacher) => {
                self.editing = Some(EditSession { id, draft: TeacherDraft::from_teacher(teacher) });
                true
            }
            None => false,
        }
    }

    /// Change one field of the edit buffer. Returns `false` when not editing.
    pub fn set_edit_field(&mut self, field: TeacherField, value: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.draft.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Build the replacement body from the edit buffer.
    pub fn begin_save(&mut self) -> Result<(i64, TeacherUpdate), Outcome> {
        let Some(session) = self.editing.as_ref() else {
            return Err(self.reject(ValidationError::NotEditing));
        };
        let id = session.id;
        match session.draft.to_update() {
            Ok(update) => {
                self.error = None;
                Ok((id, update))
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Patch the saved record in place and leave edit mode.
    ///
    /// On failure the edit session is kept so the user can retry.
    pub fn finish_save(
        &mut self,
        id: i64,
        update: &TeacherUpdate,
        result: Result<(), GatewayError>,
    ) -> Outcome {
        match result {
            Ok(()) => {
                tracing::info!("Updated teacher {}", id);
                if let Some(teacher) = self.teachers.iter_mut().find(|t| t.id == id) {
                    teacher.apply(update);
                }
                if self.is_editing(id) {
                    self.editing = None;
                }
                Outcome::Done
            }
            Err(e) => self.fail(Operation::UpdateTeacher, e),
        }
    }

    /// Send the edit buffer as a full replacement and patch the local record.
    pub async fn save_edit<G>(&mut self, gateway: &G) -> Outcome
    where
        G: TeacherGateway + ?Sized,
    {
        let (id, update) = match self.begin_save() {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };
        let result = gateway.update_profile(id, &update).await;
        self.finish_save(id, &update, result)
    }

    /// Question to put to the user before deleting a teacher.
    pub const fn delete_prompt() -> &'static str {
        CONFIRM_DELETE
    }

    /// Drop a deleted teacher from the list.
    pub fn finish_delete(&mut self, id: i64, result: Result<(), GatewayError>) -> Outcome {
        match result {
            Ok(()) => {
                tracing::info!("Deleted teacher {}", id);
                self.teachers.retain(|t| t.id != id);
                if self.is_editing(id) {
                    self.editing = None;
                }
                Outcome::Done
            }
            Err(e) => self.fail(Operation::DeleteTeacher, e),
        }
    }

    /// Delete one teacher after the user confirms and drop it from the list.
    pub async fn delete<G, I>(&mut self, id: i64, gateway: &G, ui: &I) -> Outcome
    where
        G: TeacherGateway + ?Sized,
        I: Interaction + ?Sized,
    {
        if !ui.confirm(CONFIRM_DELETE) {
            return Outcome::Cancelled;
        }

        self.error = None;
        let result = gateway.delete_profile(id).await;
        self.finish_delete(id, result)
    }

    pub fn open_create_form(&mut self) {
        self.create_form_open = true;
    }

    /// Hide the creation form. Typed values are kept.
    pub fn close_create_form(&mut self) {
        self.create_form_open = false;
    }

    pub fn set_new_field(&mut self, field: TeacherField, value: impl Into<String>) {
        self.new_teacher.set(field, value);
    }

    /// Build the creation body; every field must be filled in.
    pub fn begin_add(&mut self) -> Result<NewTeacher, Outcome> {
        match self.new_teacher.to_new_teacher() {
            Ok(body) => {
                self.error = None;
                Ok(body)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Append the server's record, then clear and close the creation form.
    pub fn finish_add(&mut self, result: Result<Teacher, GatewayError>) -> Outcome {
        match result {
            Ok(created) => {
                tracing::info!("Added teacher {} ({})", created.id, created.name);
                self.teachers.push(created);
                self.new_teacher.clear();
                self.create_form_open = false;
                Outcome::Done
            }
            Err(e) => self.fail(Operation::CreateTeacher, e),
        }
    }

    /// Create a teacher from the creation form.
    pub async fn add_teacher<G>(&mut self, gateway: &G) -> Outcome
    where
        G: TeacherGateway + ?Sized,
    {
        let body = match self.begin_add() {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };
        let result = gateway.create_profile(&body).await;
        self.finish_add(result)
    }

    fn reject(&mut self, error: ValidationError) -> Outcome {
        tracing::warn!("Rejected teacher form: {}", error);
        self.error = Some(error.to_string());
        Outcome::Invalid(error)
    }

    fn fail(&mut self, operation: Operation, error: GatewayError) -> Outcome {
        tracing::error!("Failed to {}: {}", operation, error);
        self.error = Some(error.user_message(operation));
        Outcome::Failed(error)
    }
}
