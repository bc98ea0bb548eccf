use crate::models::{ListEnvelope, Student, StudentInput};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct StudentService {
    api: ApiClient,
}

impl StudentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_students(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Student>, ApiError> {
        self.api.get_json("/students/", params).await
    }

    pub async fn create_student(&self, input: &StudentInput) -> Result<Student, ApiError> {
        self.api.post_json("/students/", input).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/students/{}/", id)).await
    }
}
