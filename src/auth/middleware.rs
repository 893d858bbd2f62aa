use axum::{extract::FromRequestParts, http::request::Parts};

use crate::state::AppState;

use super::error::*;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const COMPANY_ID_HEADER: &str = "x-company-id";

///
/// Identity of the caller as asserted by the authenticating gateway
/// in front of this service.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub company_id: i32,
}

impl FromRequestParts<AppState> for AuthUser
{
    type Rejection = Error;
    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> std::result::Result<Self, Self::Rejection> {
        extract_identity(parts)
    }
}

pub(super) fn extract_identity(parts: &Parts) -> Result<AuthUser> {
    Ok(AuthUser {
        id: extract_id(parts, USER_ID_HEADER)?,
        company_id: extract_id(parts, COMPANY_ID_HEADER)?,
    })
}

fn extract_id(parts: &Parts, header: &'static str) -> Result<i32> {
    let Some(value) = parts.headers.get(header) else {
        return Err(Error::Unauthorized);
    };

    value.to_str().ok()
        .and_then(|contents| contents.trim().parse().ok())
        .ok_or(Error::ParseHeaderError(header))
}
