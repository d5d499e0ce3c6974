use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::user::Credentials;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
/// Body of `POST /auth/login`.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Credentials::new(form.username, form.password)
    }
}

impl From<&Credentials> for LoginForm {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}
