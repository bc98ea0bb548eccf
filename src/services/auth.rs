// ============================================================================
// AUTH SERVICE - Login, registration and session persistence
// ============================================================================

use crate::models::{Credentials, LoginResponse, ProfileUpdate, RegisterRequest, User};
use crate::services::api::{ApiClient, ApiError};
use crate::utils::{
    load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage,
    STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER,
};

#[derive(Clone, PartialEq)]
pub struct AuthService {
    api: ApiClient,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// Authenticate and persist the session. The stored token is what the
    /// API client attaches to every later request.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response: LoginResponse = self.api.post_json("/auth/login/", &credentials.to_body()).await?;

        save_raw(STORAGE_KEY_AUTH_TOKEN, &response.token)
            .map_err(|e| ApiError { status: None, message: e })?;
        let _ = save_to_storage(STORAGE_KEY_USER, &response.user);

        log::info!("✅ Logged in as {}", response.user.username);
        Ok(response.user)
    }

    /// Create the account only; the caller redirects to login afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.post_no_content("/auth/register/", request).await?;
        log::info!("📝 Registered account for {}", request.email);
        Ok(())
    }

    /// Tell the backend, then clear the persisted session no matter what it
    /// answered. The client must never stay in a "looks logged in" state
    /// the server disagrees with.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .api
            .post_no_content("/auth/logout/", &serde_json::json!({}))
            .await;

        remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
        remove_from_storage(STORAGE_KEY_USER);
        log::info!("👋 Logged out");

        result
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let user: User = self.api.patch_json("/auth/profile/", update).await?;
        let _ = save_to_storage(STORAGE_KEY_USER, &user);
        Ok(user)
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.api
            .post_no_content("/auth/reset-password/", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.api
            .post_no_content(
                "/auth/reset-password/confirm/",
                &serde_json::json!({ "token": token, "new_password": new_password }),
            )
            .await
    }

    /// Previously persisted session, read synchronously from storage. A
    /// corrupt user record is dropped by the storage layer, which leaves us
    /// cleanly logged out.
    pub fn stored_user(&self) -> Option<User> {
        if load_raw(STORAGE_KEY_AUTH_TOKEN).is_none() {
            return None;
        }
        load_from_storage::<User>(STORAGE_KEY_USER)
    }
}
