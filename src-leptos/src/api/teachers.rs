//! Teacher profile API calls

use super::{api_get, encode, read_json, send, FetchGateway, TEACHER_API};
use async_trait::async_trait;
use classroom_core::{GatewayError, TeacherGateway};
use classroom_types::{NewTeacher, Teacher, TeacherUpdate};

#[async_trait(?Send)]
impl TeacherGateway for FetchGateway {
    async fn list_profiles(&self) -> Result<Vec<Teacher>, GatewayError> {
        api_get(TEACHER_API).await
    }

    async fn create_profile(&self, teacher: &NewTeacher) -> Result<Teacher, GatewayError> {
        let resp = send("POST", TEACHER_API, Some(encode(teacher)?)).await?;
        read_json(&resp).await
    }

    async fn update_profile(&self, id: i64, update: &TeacherUpdate) -> Result<(), GatewayError> {
        send("PUT", &format!("{}/{}", TEACHER_API, id), Some(encode(update)?)).await?;
        Ok(())
    }

    async fn delete_profile(&self, id: i64) -> Result<(), GatewayError> {
        send("DELETE", &format!("{}/{}", TEACHER_API, id), None).await?;
        Ok(())
    }
}
