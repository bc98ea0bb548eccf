use crate::models::{FeeItem, ListEnvelope, Payment};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Default)]
pub struct FinanceService {
    api: ApiClient,
}

impl FinanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_fee_items(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<FeeItem>, ApiError> {
        self.api.get_json("/finance/fees/", params).await
    }

    pub async fn list_payments(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Payment>, ApiError> {
        self.api.get_json("/finance/payments/", params).await
    }
}
