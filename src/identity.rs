//! Acting-user extraction.
//!
//! Authentication happens upstream (reverse proxy / auth gateway). That layer
//! forwards the verified identity in `x-user-id` and, for administrators,
//! `x-user-admin: true`. Requests without an identity are rejected with 401.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::GameError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ADMIN_HEADER: &str = "x-user-admin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActingUser {
    pub id: String,
    pub admin: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = GameError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(GameError::Unauthorized)?
            .to_string();
        let admin = parts
            .headers
            .get(USER_ADMIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(ActingUser { id, admin })
    }
}
