use crate::models::{Classroom, ListEnvelope, Resource};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct FacilityService {
    api: ApiClient,
}

impl FacilityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_classrooms(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Classroom>, ApiError> {
        self.api.get_json("/facilities/classrooms/", params).await
    }

    pub async fn delete_classroom(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/facilities/classrooms/{}/", id))
            .await
    }

    pub async fn list_resources(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Resource>, ApiError> {
        self.api.get_json("/facilities/resources/", params).await
    }
}
