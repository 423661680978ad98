use crate::error::ClientError;
use crate::types::ClientConfig;
use async_trait::async_trait;
use classroom_core::{AssignmentGateway, GatewayError, TeacherGateway};
use classroom_types::{
    AssignRequest, Assignment, MessageResponse, NewTeacher, Teacher, TeacherSummary,
    TeacherUpdate,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ClassroomClient {
    client: Client,
    config: ClientConfig,
}

impl ClassroomClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config: config.normalized() })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn assignment_url(&self, path: &str) -> String {
        format!("{}{}", self.config.assignment_base_url, path)
    }

    fn teacher_url(&self, path: &str) -> String {
        format!("{}{}", self.config.teacher_base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        tracing::debug!("{} {}", method, url);
        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text).ok().and_then(|b| b.message);
            tracing::debug!("{} {} -> {}", method, url, status);
            return Err(ClientError::ServerError { status: status.as_u16(), message });
        }
        Ok(resp)
    }

    async fn get<R: DeserializeOwned>(&self, url: String) -> Result<R, ClientError> {
        let request = self.client.get(&url);
        let resp = self.send(Method::GET, url, request).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Send a mutating assignment request. An empty body counts as no message.
    async fn message(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<MessageResponse, ClientError> {
        let resp = self.send(method, url, request).await?;
        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AssignmentGateway for ClassroomClient {
    async fn list_teachers(&self) -> Result<Vec<TeacherSummary>, GatewayError> {
        Ok(self.get(self.assignment_url("/teachers")).await?)
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, GatewayError> {
        Ok(self.get(self.assignment_url("/assignments")).await?)
    }

    async fn assign(&self, request: &AssignRequest) -> Result<MessageResponse, GatewayError> {
        let url = self.assignment_url("/assign");
        let builder = self.client.post(&url).json(request);
        Ok(self.message(Method::POST, url, builder).await?)
    }

    async fn remove_assignment(&self, id: i64) -> Result<MessageResponse, GatewayError> {
        let url = self.assignment_url(&format!("/assignment/{}", id));
        let builder = self.client.delete(&url);
        Ok(self.message(Method::DELETE, url, builder).await?)
    }
}

#[async_trait(?Send)]
impl TeacherGateway for ClassroomClient {
    async fn list_profiles(&self) -> Result<Vec<Teacher>, GatewayError> {
        Ok(self.get(self.teacher_url("")).await?)
    }

    async fn create_profile(&self, teacher: &NewTeacher) -> Result<Teacher, GatewayError> {
        let url = self.teacher_url("");
        let builder = self.client.post(&url).json(teacher);
        let resp = self.send(Method::POST, url, builder).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()).into())
    }

    async fn update_profile(&self, id: i64, update: &TeacherUpdate) -> Result<(), GatewayError> {
        let url = self.teacher_url(&format!("/{}", id));
        let builder = self.client.put(&url).json(update);
        self.send(Method::PUT, url, builder).await?;
        Ok(())
    }

    async fn delete_profile(&self, id: i64) -> Result<(), GatewayError> {
        let url = self.teacher_url(&format!("/{}", id));
        let builder = self.client.delete(&url);
        self.send(Method::DELETE, url, builder).await?;
        Ok(())
    }
}
