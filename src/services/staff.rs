use crate::models::{ListEnvelope, StaffMember};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct StaffService {
    api: ApiClient,
}

impl StaffService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_staff(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<StaffMember>, ApiError> {
        self.api.get_json("/staff/", params).await
    }

    pub async fn delete_staff(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/staff/{}/", id)).await
    }
}
