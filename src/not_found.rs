//! The fallback handler for requests that do not match any route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ErrorResponse;

/// Respond to an unmatched route with the JSON error envelope.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "the requested resource could not be found",
        )),
    )
        .into_response()
}
