use crate::domain::types::UserId;
use crate::domain::user::{Credentials, User, UserRole};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";

/// A user record, with the credentials the mock login accepts for it if any.
#[derive(Clone, Debug)]
pub struct FixtureUser {
    pub user: User,
    pub credentials: Option<Credentials>,
}

fn fixture_user(
    id: i32,
    username: &str,
    password: Option<&str>,
    name: &str,
    email: &str,
    role: UserRole,
) -> Option<FixtureUser> {
    Some(FixtureUser {
        user: User {
            id: UserId::new(id).ok()?,
            username: username.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        },
        credentials: password.map(|password| Credentials::new(username, password)),
    })
}

/// Known users. Only the demo account can log in.
pub fn fixture_users() -> Vec<FixtureUser> {
    [
        fixture_user(
            1,
            DEMO_USERNAME,
            Some(DEMO_PASSWORD),
            "Demo Benutzer",
            "demo@crm.example.de",
            UserRole::Admin,
        ),
        fixture_user(
            2,
            "k.neumann",
            None,
            "Katrin Neumann",
            "k.neumann@crm.example.de",
            UserRole::Sales,
        ),
        fixture_user(
            3,
            "p.koch",
            None,
            "Peter Koch",
            "p.koch@crm.example.de",
            UserRole::Viewer,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
