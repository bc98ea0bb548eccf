use crate::models::{Campaign, Lead, LeadInput, ListEnvelope};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct MarketingService {
    api: ApiClient,
}

impl MarketingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_campaigns(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Campaign>, ApiError> {
        self.api.get_json("/marketing/campaigns/", params).await
    }

    pub async fn list_leads(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Lead>, ApiError> {
        self.api.get_json("/marketing/leads/", params).await
    }

    pub async fn create_lead(&self, input: &LeadInput) -> Result<Lead, ApiError> {
        self.api.post_json("/marketing/leads/", input).await
    }

    pub async fn delete_lead(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/marketing/leads/{}/", id)).await
    }
}
