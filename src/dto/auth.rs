//! Payloads exchanged with the mock auth endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Prefix of every token issued by `POST /auth/login`.
pub const MOCK_TOKEN_PREFIX: &str = "mock-jwt-token-";

/// Data returned by a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// Authenticated session kept by the client after logging in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Value of the `Authorization` header for this session.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<LoginData> for Session {
    fn from(data: LoginData) -> Self {
        Self {
            token: data.token,
            user: data.user,
        }
    }
}

/// Issues a token of the form `mock-jwt-token-<unix millis>`.
pub fn issue_mock_token(unix_millis: i64) -> String {
    format!("{MOCK_TOKEN_PREFIX}{unix_millis}")
}

/// Checks an `Authorization` header value for a mock bearer token.
pub fn is_mock_bearer(header: &str) -> bool {
    header
        .strip_prefix("Bearer ")
        .is_some_and(|token| token.starts_with(MOCK_TOKEN_PREFIX))
}
