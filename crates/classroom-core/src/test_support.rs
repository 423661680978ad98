//! In-memory gateway and scripted interaction shared by store tests.

use crate::{AssignmentGateway, GatewayError, Interaction, TeacherGateway};
use async_trait::async_trait;
use classroom_types::{
    AssignRequest, Assignment, MessageResponse, NewTeacher, Teacher, TeacherSummary,
    TeacherUpdate,
};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListTeachers,
    ListAssignments,
    Assign(AssignRequest),
    RemoveAssignment(i64),
    ListProfiles,
    CreateProfile(NewTeacher),
    UpdateProfile(i64, TeacherUpdate),
    DeleteProfile(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
    ListTeachers,
    ListAssignments,
    Assign,
    RemoveAssignment,
    ListProfiles,
    CreateProfile,
    UpdateProfile,
    DeleteProfile,
}

impl Call {
    fn kind(&self) -> CallKind {
        match self {
            Call::ListTeachers => CallKind::ListTeachers,
            Call::ListAssignments => CallKind::ListAssignments,
            Call::Assign(_) => CallKind::Assign,
            Call::RemoveAssignment(_) => CallKind::RemoveAssignment,
            Call::ListProfiles => CallKind::ListProfiles,
            Call::CreateProfile(_) => CallKind::CreateProfile,
            Call::UpdateProfile(..) => CallKind::UpdateProfile,
            Call::DeleteProfile(_) => CallKind::DeleteProfile,
        }
    }
}

/// Fake backend holding both collections and recording every call.
#[derive(Default)]
pub(crate) struct RecordingGateway {
    pub(crate) summaries: RefCell<Vec<TeacherSummary>>,
    pub(crate) assignments: RefCell<Vec<Assignment>>,
    pub(crate) profiles: RefCell<Vec<Teacher>>,
    pub(crate) calls: RefCell<Vec<Call>>,
    pub(crate) assign_message: RefCell<Option<String>>,
    failure: RefCell<Option<(CallKind, GatewayError)>>,
    next_id: Cell<i64>,
}

impl RecordingGateway {
    pub(crate) fn new() -> Self {
        let gw = Self::default();
        gw.next_id.set(100);
        gw
    }

    /// Every call of `kind` fails with `error` from now on.
    pub(crate) fn fail_on(&self, kind: CallKind, error: GatewayError) {
        *self.failure.borrow_mut() = Some((kind, error));
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, kind: CallKind) -> usize {
        self.calls.borrow().iter().filter(|c| c.kind() == kind).count()
    }

    fn record(&self, call: Call) -> Result<(), GatewayError> {
        let kind = call.kind();
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().as_ref() {
            Some((k, e)) if *k == kind => Err(e.clone()),
            _ => Ok(()),
        }
    }

    fn allocate_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[async_trait(?Send)]
impl AssignmentGateway for RecordingGateway {
    async fn list_teachers(&self) -> Result<Vec<TeacherSummary>, GatewayError> {
        self.record(Call::ListTeachers)?;
        Ok(self.summaries.borrow().clone())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, GatewayError> {
        self.record(Call::ListAssignments)?;
        Ok(self.assignments.borrow().clone())
    }

    async fn assign(&self, request: &AssignRequest) -> Result<MessageResponse, GatewayError> {
        self.record(Call::Assign(request.clone()))?;
        let teacher_name = self
            .summaries
            .borrow()
            .iter()
            .find(|t| t.id == request.teacher_id)
            .map(|t| t.name.clone())
            .unwrap_or_default();
        let id = self.allocate_id();
        self.assignments.borrow_mut().push(Assignment {
            id,
            teacher_id: request.teacher_id,
            teacher_name,
            class_name: request.class_name.clone(),
            created_at: "2024-05-01T10:15:00Z".to_string(),
        });
        Ok(MessageResponse { message: self.assign_message.borrow().clone() })
    }

    async fn remove_assignment(&self, id: i64) -> Result<MessageResponse, GatewayError> {
        self.record(Call::RemoveAssignment(id))?;
        self.assignments.borrow_mut().retain(|a| a.id != id);
        Ok(MessageResponse { message: Some("Assignment removed successfully".to_string()) })
    }
}

#[async_trait(?Send)]
impl TeacherGateway for RecordingGateway {
    async fn list_profiles(&self) -> Result<Vec<Teacher>, GatewayError> {
        self.record(Call::ListProfiles)?;
        Ok(self.profiles.borrow().clone())
    }

    async fn create_profile(&self, teacher: &NewTeacher) -> Result<Teacher, GatewayError> {
        self.record(Call::CreateProfile(teacher.clone()))?;
        let created = Teacher {
            id: self.allocate_id(),
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            class: teacher.class.clone(),
            attendance: teacher.attendance.clone(),
            subject: teacher.subject.clone(),
            salary: teacher.salary,
        };
        self.profiles.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_profile(&self, id: i64, update: &TeacherUpdate) -> Result<(), GatewayError> {
        self.record(Call::UpdateProfile(id, update.clone()))
    }

    async fn delete_profile(&self, id: i64) -> Result<(), GatewayError> {
        self.record(Call::DeleteProfile(id))
    }
}

/// Answers every prompt with a fixed choice and records what was shown.
pub(crate) struct ScriptedUser {
    answer: bool,
    pub(crate) prompts: RefCell<Vec<String>>,
    pub(crate) notices: RefCell<Vec<String>>,
}

impl ScriptedUser {
    pub(crate) fn confirming() -> Self {
        Self { answer: true, prompts: RefCell::default(), notices: RefCell::default() }
    }

    pub(crate) fn declining() -> Self {
        Self { answer: false, prompts: RefCell::default(), notices: RefCell::default() }
    }
}

impl Interaction for ScriptedUser {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

pub(crate) fn summary(id: i64, name: &str, subject: &str) -> TeacherSummary {
    TeacherSummary { id, name: name.to_string(), subject: subject.to_string() }
}

pub(crate) fn teacher(id: i64, name: &str, salary: f64) -> Teacher {
    Teacher {
        id,
        name: name.to_string(),
        email: format!("{}@school.test", name.to_lowercase()),
        class: "Class 1".to_string(),
        attendance: "95%".to_string(),
        subject: "Math".to_string(),
        salary,
    }
}
