use log::{info, warn};
use validator::Validate;

use crate::domain::user::{Credentials, User};
use crate::dto::auth::{LoginData, Session};
use crate::forms::auth::LoginForm;
use crate::services::{ApiService, ServiceError, ServiceResult};
use crate::transport::{ApiRequest, Transport};

pub struct AuthService<'a, T> {
    api: &'a ApiService<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub fn new(api: &'a ApiService<T>) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a session. Wrong credentials yield
    /// [`ServiceError::Unauthorized`].
    pub async fn login(&self, credentials: &Credentials) -> ServiceResult<Session> {
        let form = LoginForm::from(credentials);
        form.validate()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        let data = self
            .api
            .post::<_, LoginData>("/auth/login", &form)
            .await?
            .into_data()
            .inspect_err(|err| warn!("Login failed for {}: {err}", credentials.username))?;

        info!("Logged in as {}", data.user.username);
        Ok(Session::from(data))
    }

    pub async fn logout(&self, session: &Session) -> ServiceResult<()> {
        self.api
            .call::<serde_json::Value>(
                ApiRequest::post("/auth/logout").authorization(session.bearer()),
            )
            .await?
            .into_unit()
    }

    /// Resolves the user behind a token.
    pub async fn me(&self, token: &str) -> ServiceResult<User> {
        self.api
            .call::<User>(ApiRequest::get("/auth/me").authorization(format!("Bearer {token}")))
            .await?
            .into_data()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dto::auth::MOCK_TOKEN_PREFIX;
    use crate::fixtures::{DEMO_PASSWORD, DEMO_USERNAME};
    use crate::mock::MockRouter;
    use crate::repository::FixtureRepository;

    fn api() -> ApiService<MockRouter<FixtureRepository>> {
        ApiService::new(MockRouter::new(FixtureRepository::seeded(3), Duration::ZERO))
    }

    #[tokio::test]
    async fn demo_login_round_trip() {
        let api = api();
        let session = api
            .auth()
            .login(&Credentials::new(DEMO_USERNAME, DEMO_PASSWORD))
            .await
            .expect("logged in");

        assert!(session.token.starts_with(MOCK_TOKEN_PREFIX));
        assert_eq!(session.user.username, DEMO_USERNAME);

        let me = api.auth().me(&session.token).await.expect("current user");
        assert_eq!(me, session.user);
        assert_eq!(api.auth().logout(&session).await, Ok(()));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let err = api()
            .auth()
            .login(&Credentials::new(DEMO_USERNAME, "wrong"))
            .await
            .expect_err("rejected");
        assert_eq!(err, ServiceError::Unauthorized);
    }

    #[tokio::test]
    async fn empty_credentials_are_not_sent() {
        let err = api()
            .auth()
            .login(&Credentials::new("", ""))
            .await
            .expect_err("rejected");
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[tokio::test]
    async fn foreign_token_is_unauthorized() {
        let err = api().auth().me("real-jwt").await.expect_err("rejected");
        assert_eq!(err, ServiceError::Unauthorized);
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use serde_json::json;

    use super::*;
    use crate::transport::mock::MockBackend;
    use crate::transport::{ApiReply, Method};

    #[tokio::test]
    async fn logout_sends_bearer_header() {
        let mut backend = MockBackend::new();
        backend
            .expect_send()
            .withf(|request| {
                request.method == Method::Post
                    && request.path == "/auth/logout"
                    && request.authorization.as_deref() == Some("Bearer mock-jwt-token-5")
            })
            .times(1)
            .returning(|_| {
                Ok(ApiReply {
                    status: 200,
                    body: json!({"success": true, "message": "Logged out"}),
                })
            });

        let api = ApiService::new(backend);
        let session = Session {
            token: "mock-jwt-token-5".to_string(),
            user: User {
                id: crate::domain::types::UserId::new(1).expect("valid id"),
                username: "demo".to_string(),
                name: "Demo Benutzer".to_string(),
                email: "demo@crm.example.de".to_string(),
                role: crate::domain::user::UserRole::Admin,
            },
        };

        assert_eq!(api.auth().logout(&session).await, Ok(()));
    }
}
