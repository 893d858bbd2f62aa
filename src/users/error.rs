use axum::{http::StatusCode, response::IntoResponse, Json};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::{response::internal_server_error_response, store};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ERR_CANNOT_CHANGE_SUPER_ADMIN_PROFILE_TO_USER")]
    CannotChangeSuperAdminProfileToUser,
    #[error("ERR_CANNOT_EDIT_SUPER_USER_PROFILE")]
    CannotEditSuperUserProfile,
    #[error("ERR_CANNOT_EDIT_SUPER_USER")]
    CannotEditSuperUser,
    #[error("User does not belong to this company")]
    TenantMismatch,
    #[error("{0}")]
    ValidationFailed(String),
    #[error("User not found: {0}")]
    UserNotFound(i32),
    #[error("Acting user not found: {0}")]
    ActorNotFound(i32),
    #[error(transparent)]
    Store(#[from] store::error::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::CannotChangeSuperAdminProfileToUser => "ERR_CANNOT_CHANGE_SUPER_ADMIN_PROFILE_TO_USER",
            Self::CannotEditSuperUserProfile => "ERR_CANNOT_EDIT_SUPER_USER_PROFILE",
            Self::CannotEditSuperUser => "ERR_CANNOT_EDIT_SUPER_USER",
            Self::TenantMismatch => "ERR_USER_NOT_IN_COMPANY",
            Self::ValidationFailed(_) => "ERR_VALIDATION",
            Self::UserNotFound(_) => "ERR_NO_USER_FOUND",
            Self::ActorNotFound(_) => "ERR_NO_ACTOR_FOUND",
            Self::Store(_) => "ERR_INTERNAL",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::CannotChangeSuperAdminProfileToUser | Self::CannotEditSuperUserProfile |
            Self::CannotEditSuperUser | Self::TenantMismatch => StatusCode::FORBIDDEN,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::ActorNotFound(_) => StatusCode::UNAUTHORIZED,
            Self::Store(_) => {
                error!("{}", self);
                return internal_server_error_response();
            },
        };

        (status, Json(json!({ "error": self.code(), "message": self.to_string() }))).into_response()
    }
}
