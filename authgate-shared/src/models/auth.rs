use serde::{Deserialize, Serialize};

use super::User;

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password, sent in the clear over TLS; the API owns hashing.
    pub password: String,
}

/// Request to authenticate an existing account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Successful response to signup and login: the session pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque session token minted and verified only by the API.
    pub token: String,

    /// Profile of the authenticated user.
    pub user: User,
}

/// Successful response to the dashboard fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardResponse {
    /// Authoritative profile for the session's user.
    pub user: User,
}

/// Error body returned by the API on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// The main error message.
    pub error: String,

    /// Optional detail, used by signup to restate the password requirements.
    #[serde(default)]
    pub requirements: Option<String>,
}

impl ErrorBody {
    /// Collapse the body into a single user-facing message.
    #[must_use]
    pub fn into_message(self) -> String {
        match self.requirements {
            Some(requirements) => format!("{} {requirements}", self.error),
            None => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests login request wire shape
    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "Abc@1234".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
        assert!(!json.contains("\"name\""));
    }

    /// Tests signup request carries all three fields
    #[test]
    fn test_signup_request_shape() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abc@1234".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"name\":\"Ada\""));
    }

    /// Tests that an auth response missing the token fails to decode
    #[test]
    fn test_auth_response_requires_both_fields() {
        let missing_token = r#"{"user":{"id":"u","name":"N","email":"n@x.com"}}"#;
        assert!(serde_json::from_str::<AuthResponse>(missing_token).is_err());

        let missing_user = r#"{"token":"tok"}"#;
        assert!(serde_json::from_str::<AuthResponse>(missing_user).is_err());
    }

    /// Tests error body message collapsing with and without requirements
    #[test]
    fn test_error_body_into_message() {
        let plain = ErrorBody {
            error: "Signup failed".to_string(),
            requirements: None,
        };
        assert_eq!(plain.into_message(), "Signup failed");

        let detailed = ErrorBody {
            error: "Password too weak.".to_string(),
            requirements: Some("At least 8 characters.".to_string()),
        };
        assert_eq!(
            detailed.into_message(),
            "Password too weak. At least 8 characters."
        );
    }

    /// Tests error body decoding when the requirements field is absent
    #[test]
    fn test_error_body_optional_requirements() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.requirements, None);
        assert_eq!(body.into_message(), "Invalid credentials");
    }
}
