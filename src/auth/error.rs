use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unauthorized. Requests must carry the `x-user-id` and `x-company-id` headers")]
    Unauthorized,
    #[error("Could not parse identity header `{0}`")]
    ParseHeaderError(&'static str),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        return match self {
            Error::Unauthorized
                => (StatusCode::UNAUTHORIZED, self.to_string()).into_response(),
            Error::ParseHeaderError(_)
                => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        };
    }
}
