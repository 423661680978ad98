#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

use classroom_client::{ClassroomClient, ClientConfig};
use classroom_core::{
    AssignmentGateway, AssignmentManager, GatewayError, Interaction, Outcome, ProfileManager,
    TeacherGateway,
};
use classroom_types::{AssignRequest, NewTeacher, TeacherField, TeacherUpdate};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ClassroomClient {
    let config = ClientConfig {
        assignment_base_url: format!("{}/api/assignteacher/", server.uri()),
        teacher_base_url: format!("{}/api/teacher", server.uri()),
        timeout_secs: 5,
    };
    ClassroomClient::new(config).expect("client builds")
}

fn teacher_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@school.test", name.to_lowercase()),
        "class": "Class 1",
        "attendance": "95%",
        "subject": "Math",
        "salary": 4000.0
    })
}

#[derive(Default)]
struct AutoConfirm {
    notices: RefCell<Vec<String>>,
}

impl Interaction for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

#[tokio::test]
async fn test_list_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/assignteacher/teachers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3, "name": "Lin", "subject": "Art"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/assignteacher/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 11, "teacherId": 3, "teacherName": "Lin",
            "className": "Class 4", "createdAt": "2024-05-01T10:15:00"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let teachers = client.list_teachers().await.expect("teachers");
    let assignments = client.list_assignments().await.expect("assignments");

    assert_eq!(teachers[0].label(), "Lin - Art");
    assert_eq!(assignments[0].class_name, "Class 4");
}

#[tokio::test]
async fn test_server_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/assignteacher/assign"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "Teacher not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .assign(&AssignRequest { teacher_id: 99, class_name: "Class 1".to_string() })
        .await
        .expect_err("400 must fail");

    assert_eq!(
        err,
        GatewayError::Server { status: 400, message: Some("Teacher not found".to_string()) }
    );
}

#[tokio::test]
async fn test_plain_text_error_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teacher"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_profiles().await.expect_err("500 must fail");
    assert_eq!(err, GatewayError::Server { status: 500, message: None });
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teacher"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_profiles().await.expect_err("bad body must fail");
    assert!(matches!(err, GatewayError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let config = ClientConfig {
        assignment_base_url: "http://127.0.0.1:1/api".to_string(),
        timeout_secs: 2,
        ..ClientConfig::default()
    };
    let client = ClassroomClient::new(config).expect("client builds");
    let err = client.list_teachers().await.expect_err("nothing listens on port 1");
    assert!(matches!(err, GatewayError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_empty_delete_body_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/assignteacher/assignment/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).remove_assignment(5).await.expect("delete");
    assert_eq!(resp.message, None);
}

#[tokio::test]
async fn test_profile_crud_requests() {
    let server = MockServer::start().await;
    let new = NewTeacher {
        name: "Grace".to_string(),
        email: "grace@school.test".to_string(),
        class: "Class 5".to_string(),
        attendance: "99%".to_string(),
        subject: "CS".to_string(),
        salary: 5100.25,
    };
    Mock::given(method("POST"))
        .and(path("/api/teacher"))
        .and(body_json(&new))
        .respond_with(ResponseTemplate::new(201).set_body_json(teacher_json(8, "Grace")))
        .expect(1)
        .mount(&server)
        .await;
    let update = TeacherUpdate {
        name: "Grace H.".to_string(),
        email: "grace@school.test".to_string(),
        class: "Class 5".to_string(),
        attendance: "99%".to_string(),
        subject: "CS".to_string(),
        salary: 5200.0,
    };
    Mock::given(method("PUT"))
        .and(path("/api/teacher/8"))
        .and(body_json(&update))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/teacher/8"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.create_profile(&new).await.expect("create");
    assert_eq!(created.id, 8);
    client.update_profile(8, &update).await.expect("update");
    client.delete_profile(8).await.expect("delete");
}

#[tokio::test]
async fn test_assign_flow_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/assignteacher/assign"))
        .and(body_json(serde_json::json!({"teacherId": 3, "className": "Class 4"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/assignteacher/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ui = AutoConfirm::default();
    let mut screen = AssignmentManager::new();
    screen.select_teacher("3");
    screen.select_class("Class 4");

    let outcome = screen.assign(&client, &ui).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(screen.selected_teacher(), "");
    assert_eq!(screen.selected_class(), "");
    assert_eq!(*ui.notices.borrow(), vec!["ok".to_string()]);
}

#[tokio::test]
async fn test_profile_add_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teacher"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            teacher_json(1, "Ada")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/teacher"))
        .respond_with(ResponseTemplate::new(201).set_body_json(teacher_json(2, "Lin")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut screen = ProfileManager::new();
    screen.fetch_teachers(&client).await;
    screen.open_create_form();
    for (field, value) in [
        (TeacherField::Name, "Lin"),
        (TeacherField::Email, "lin@school.test"),
        (TeacherField::Class, "Class 1"),
        (TeacherField::Attendance, "95%"),
        (TeacherField::Subject, "Math"),
        (TeacherField::Salary, "4000"),
    ] {
        screen.set_new_field(field, value);
    }

    assert_eq!(screen.add_teacher(&client).await, Outcome::Done);
    let names: Vec<&str> = screen.teachers().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Lin"]);
    assert!(!screen.is_create_form_open());
}
