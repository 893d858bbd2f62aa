use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

pub fn internal_server_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "ERR_INTERNAL",
            "message": "An error has occurred. Please try again later.",
        })),
    )
        .into_response()
}
