// ============================================================================
// USE AUTH HOOK - Session context shared by every guarded screen
// ============================================================================
// One explicitly-constructed session per AuthProvider, shared through Yew's
// Context API. No ambient singleton: tests build SessionState directly and
// an isolated provider can be mounted anywhere.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Credentials, ProfileUpdate, RegisterRequest, Role, User};
use crate::services::{ApiError, AuthService};

/// The authenticated identity plus the loading/error status of the most
/// recent auth operation. `is_authenticated()` is true exactly when a user
/// is present.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl SessionState {
    pub fn from_stored(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True iff the current user's role is one of `roles`. Always false
    /// with nobody logged in.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        match &self.user {
            Some(user) => roles.contains(&user.role),
            None => false,
        }
    }

    /// Entry bracket shared by every operation: loading on, stale error
    /// cleared, user untouched.
    fn begin(&self) -> Self {
        Self {
            user: self.user.clone(),
            loading: true,
            error: None,
        }
    }

    fn with_user(&self, user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    fn settled(&self) -> Self {
        Self {
            user: self.user.clone(),
            loading: false,
            error: None,
        }
    }

    fn failed(&self, error: ApiError) -> Self {
        Self {
            user: self.user.clone(),
            loading: false,
            error: Some(error),
        }
    }

    /// Logout outcome: identity is dropped unconditionally; a remote
    /// failure is kept visible but never keeps the user "logged in".
    fn logged_out(&self, error: Option<ApiError>) -> Self {
        Self {
            user: None,
            loading: false,
            error,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    state: UseStateHandle<SessionState>,
    service: Rc<AuthService>,
}

impl UseAuthHandle {
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.state.error.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.state.has_role(roles)
    }

    /// Authenticate. The error is both stored on the session and returned,
    /// so forms decide how to present it.
    pub async fn login(&self, credentials: Credentials) -> Result<User, ApiError> {
        self.state.set(self.state.begin());

        match self.service.login(&credentials).await {
            Ok(user) => {
                self.state.set(self.state.with_user(user.clone()));
                Ok(user)
            }
            Err(err) => {
                log::error!("❌ Login failed: {}", err);
                self.state.set(self.state.failed(err.clone()));
                Err(err)
            }
        }
    }

    /// Create an account. Does not log in; callers redirect to the login
    /// screen on success.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        self.state.set(self.state.begin());

        match self.service.register(&request).await {
            Ok(()) => {
                self.state.set(self.state.settled());
                Ok(())
            }
            Err(err) => {
                self.state.set(self.state.failed(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.state.set(self.state.begin());

        let result = self.service.logout().await;
        self.state
            .set(self.state.logged_out(result.as_ref().err().cloned()));
        result
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ApiError> {
        self.state.set(self.state.begin());

        match self.service.update_profile(&update).await {
            Ok(user) => {
                self.state.set(self.state.with_user(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.state.set(self.state.failed(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.state.set(self.state.begin());

        match self.service.request_password_reset(email).await {
            Ok(()) => {
                self.state.set(self.state.settled());
                Ok(())
            }
            Err(err) => {
                self.state.set(self.state.failed(err.clone()));
                Err(err)
            }
        }
    }

    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.state.set(self.state.begin());

        match self.service.confirm_password_reset(token, new_password).await {
            Ok(()) => {
                self.state.set(self.state.settled());
                Ok(())
            }
            Err(err) => {
                self.state.set(self.state.failed(err.clone()));
                Err(err)
            }
        }
    }

    /// Drop the local identity without a network round trip; used when the
    /// API client reports the stored token was rejected.
    pub fn clear_session(&self) {
        self.state.set(self.state.logged_out(None));
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Owns the session for the whole app. Rehydrates any persisted session
/// synchronously on first render, so guards never see a logged-out flash
/// for a returning user.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let service = use_memo((), |_| AuthService::new());

    let state = {
        let service = service.clone();
        use_state(move || {
            let stored = service.stored_user();
            if let Some(user) = &stored {
                log::info!("🔁 Restored session for {}", user.username);
            }
            SessionState::from_stored(stored)
        })
    };

    let handle = UseAuthHandle { state, service };

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth must be used within an AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "root",
            "email": "root@school.test",
            "user_type": "admin"
        }))
        .unwrap()
    }

    #[test]
    fn authenticated_tracks_user_presence() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.with_user(admin()).is_authenticated());
    }

    #[test]
    fn begin_clears_stale_error_and_sets_loading() {
        let state = SessionState::default().failed(ApiError {
            status: Some(400),
            message: "bad credentials".into(),
        });
        let started = state.begin();
        assert!(started.loading);
        assert!(started.error.is_none());
    }

    #[test]
    fn failed_login_keeps_user_absent_and_stores_error() {
        let err = ApiError {
            status: Some(401),
            message: "bad credentials".into(),
        };
        let state = SessionState::default().begin().failed(err.clone());
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert_eq!(state.error, Some(err));
    }

    #[test]
    fn logout_drops_user_even_when_remote_call_failed() {
        let err = ApiError {
            status: Some(500),
            message: "backend down".into(),
        };
        let state = SessionState::from_stored(Some(admin())).logged_out(Some(err.clone()));
        assert!(state.user.is_none());
        assert_eq!(state.error, Some(err));

        let clean = SessionState::from_stored(Some(admin())).logged_out(None);
        assert!(clean.user.is_none());
        assert!(clean.error.is_none());
    }

    #[test]
    fn has_role_matches_single_and_multiple_roles() {
        let state = SessionState::from_stored(Some(admin()));
        assert!(state.has_role(&[Role::Admin]));
        assert!(state.has_role(&[Role::Admin, Role::Teacher]));
        assert!(!state.has_role(&[Role::Teacher]));
        assert!(!state.has_role(&[Role::Student, Role::Teacher]));

        assert!(!SessionState::default().has_role(&[Role::Admin]));
    }
}
