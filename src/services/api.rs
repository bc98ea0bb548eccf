// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here; one place that knows how to talk to the backend,
// attach the bearer token and turn non-2xx answers into ApiError.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::CustomEvent;

use crate::config::CONFIG;
use crate::utils::query::encode_query;
use crate::utils::{
    load_raw, remove_from_storage, SESSION_EXPIRED_EVENT, STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER,
};

/// The single error shape every operation surfaces: an optional HTTP status
/// plus a human-readable message. Transport failures, validation answers and
/// server faults are not distinguished further; presentation is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Network error: {}", detail),
        }
    }

    pub fn parse(detail: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Unexpected response from server: {}", detail),
        }
    }

    pub fn http(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            message: extract_error_message(status, body),
        }
    }
}

/// Pull a usable message out of an error body. The backend answers either
/// `{"message": ...}`, `{"detail": ...}`, `{"error": ...}`, or a map of
/// per-field validation errors.
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "detail", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }

        if let Some(map) = value.as_object() {
            let field_errors: Vec<String> = map
                .iter()
                .map(|(field, errors)| match errors {
                    serde_json::Value::Array(items) => {
                        let joined = items
                            .iter()
                            .filter_map(|e| e.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("{}: {}", field, joined)
                    }
                    other => format!("{}: {}", field, other.as_str().unwrap_or("invalid")),
                })
                .collect();
            if !field_errors.is_empty() {
                return field_errors.join("; ");
            }
        }
    }

    if !body.trim().is_empty() && body.len() < 200 {
        return body.trim().to_string();
    }

    format!("HTTP {}", status)
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(request: RequestBuilder) -> RequestBuilder {
        match load_raw(STORAGE_KEY_AUTH_TOKEN) {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = if query.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), encode_query(query))
        };

        let response = Self::authorize(Request::get(&url))
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::json_body(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::json_body(response).await
    }

    /// POST for endpoints that answer with an empty (or irrelevant) body.
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::check(response).await.map(|_| ())
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::json_body(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Self::authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::json_body(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Self::authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::check(response).await.map(|_| ())
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(ApiError::parse)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // An expired/revoked token: drop the persisted session and tell the
        // shell. A 401 with no stored token is an ordinary failed login.
        if status == 401 && load_raw(STORAGE_KEY_AUTH_TOKEN).is_some() {
            log::warn!("⚠️ Stored token rejected by backend, clearing session");
            remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
            remove_from_storage(STORAGE_KEY_USER);
            announce_session_expired();
        }

        Err(ApiError::http(status, &body))
    }
}

fn announce_session_expired() {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = CustomEvent::new(SESSION_EXPIRED_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_key_wins_over_everything_else() {
        let msg = extract_error_message(400, r#"{"message": "Name is required", "code": "x"}"#);
        assert_eq!(msg, "Name is required");
    }

    #[test]
    fn detail_key_is_recognized() {
        let msg = extract_error_message(403, r#"{"detail": "Forbidden"}"#);
        assert_eq!(msg, "Forbidden");
    }

    #[test]
    fn field_validation_errors_are_joined() {
        let msg = extract_error_message(
            400,
            r#"{"email": ["already registered"], "password": ["too short", "too common"]}"#,
        );
        assert!(msg.contains("email: already registered"));
        assert!(msg.contains("password: too short, too common"));
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        let long_body = "x".repeat(300);
        assert_eq!(extract_error_message(502, &long_body), "HTTP 502");
        assert_eq!(extract_error_message(500, ""), "HTTP 500");
    }

    #[test]
    fn short_plain_text_body_is_shown_verbatim() {
        assert_eq!(extract_error_message(503, "service restarting"), "service restarting");
    }
}
