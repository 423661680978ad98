//! Assignment API calls

use super::{api_get, encode, read_text, send, FetchGateway, ASSIGN_API};
use async_trait::async_trait;
use classroom_core::{AssignmentGateway, GatewayError};
use classroom_types::{AssignRequest, Assignment, MessageResponse, TeacherSummary};

/// Empty bodies carry no message.
async fn message_body(resp: &web_sys::Response) -> Result<MessageResponse, GatewayError> {
    let text = read_text(resp).await?;
    if text.trim().is_empty() {
        return Ok(MessageResponse::default());
    }
    serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AssignmentGateway for FetchGateway {
    async fn list_teachers(&self) -> Result<Vec<TeacherSummary>, GatewayError> {
        api_get(&format!("{}/teachers", ASSIGN_API)).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, GatewayError> {
        api_get(&format!("{}/assignments", ASSIGN_API)).await
    }

    async fn assign(&self, request: &AssignRequest) -> Result<MessageResponse, GatewayError> {
        let resp = send("POST", &format!("{}/assign", ASSIGN_API), Some(encode(request)?)).await?;
        message_body(&resp).await
    }

    async fn remove_assignment(&self, id: i64) -> Result<MessageResponse, GatewayError> {
        let resp = send("DELETE", &format!("{}/assignment/{}", ASSIGN_API, id), None).await?;
        message_body(&resp).await
    }
}
