use serde::{Deserialize, Serialize};

/// Account type assigned by the backend. Admin-created accounts may carry
/// any of these; self-registration always produces a student.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_admin_created: bool,
}

impl User {
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            self.username.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string()
        }
    }
}

/// Credentials accepted by `login`. Most callers use the identifier/secret
/// pair; `Provider` carries an opaque payload for alternate auth flows and
/// is forwarded to the backend as-is.
#[derive(Clone, PartialEq, Debug)]
pub enum Credentials {
    Password {
        identifier: String,
        secret: String,
        remember: bool,
    },
    Provider(serde_json::Value),
}

impl Credentials {
    pub fn password(identifier: impl Into<String>, secret: impl Into<String>, remember: bool) -> Self {
        Credentials::Password {
            identifier: identifier.into(),
            secret: secret.into(),
            remember,
        }
    }

    /// Wire body for POST /auth/login/. An identifier containing '@' is sent
    /// as `email`, anything else as `username`.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            Credentials::Password {
                identifier,
                secret,
                remember,
            } => {
                let field = if identifier.contains('@') { "email" } else { "username" };
                serde_json::json!({
                    field: identifier,
                    "password": secret,
                    "remember": remember,
                })
            }
            Credentials::Provider(payload) => payload.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub user_type: String,
}

impl RegisterRequest {
    /// Shape the backend expects, derived from the public sign-up form:
    /// the username is generated from the email local part, registration is
    /// always a student account.
    pub fn from_signup(full_name: &str, email: &str, password: &str) -> Self {
        let mut parts = full_name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");
        let username = email
            .split('@')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        Self {
            email: email.to_string(),
            password: password.to_string(),
            first_name,
            last_name,
            username,
            user_type: "student".to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Default, Debug)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_identifier_goes_out_as_email_field() {
        let body = Credentials::password("ana@example.com", "s3cret", true).to_body();
        assert_eq!(body["email"], "ana@example.com");
        assert!(body.get("username").is_none());
        assert_eq!(body["remember"], true);
    }

    #[test]
    fn plain_identifier_goes_out_as_username_field() {
        let body = Credentials::password("ana", "s3cret", false).to_body();
        assert_eq!(body["username"], "ana");
        assert!(body.get("email").is_none());
    }

    #[test]
    fn signup_request_splits_name_and_derives_username() {
        let req = RegisterRequest::from_signup("Ana María Ruiz", "ana.ruiz@example.com", "pw");
        assert_eq!(req.first_name, "Ana");
        assert_eq!(req.last_name, "María Ruiz");
        assert_eq!(req.username, "anaruiz");
        assert_eq!(req.user_type, "student");
    }

    #[test]
    fn role_deserializes_from_backend_user_type() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 7,
            "username": "ana",
            "email": "ana@example.com",
            "user_type": "teacher"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.display_name(), "ana");
    }
}
