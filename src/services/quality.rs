use crate::models::{Assessment, Feedback, ImprovementPlan, ListEnvelope};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct QualityService {
    api: ApiClient,
}

impl QualityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_assessments(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Assessment>, ApiError> {
        self.api.get_json("/quality/assessments/", params).await
    }

    pub async fn list_feedback(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Feedback>, ApiError> {
        self.api.get_json("/quality/feedback/", params).await
    }

    pub async fn update_feedback_status(&self, id: i64, status: &str) -> Result<Feedback, ApiError> {
        self.api
            .patch_json(
                &format!("/quality/feedback/{}/", id),
                &serde_json::json!({ "status": status }),
            )
            .await
    }

    pub async fn list_improvements(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<ImprovementPlan>, ApiError> {
        self.api.get_json("/quality/improvements/", params).await
    }
}
