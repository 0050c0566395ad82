use serde::{Deserialize, Serialize};

/// Identity of the signed-in staff member, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

/// Bearer token plus identity. Either fully present or absent; there is no
/// partially-populated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// The login endpoint returns exactly the shape that gets persisted.
pub type LoginResponse = Session;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
