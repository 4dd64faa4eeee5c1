//! Converts extractor rejections into the API's JSON error envelope.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ErrorResponse;

/// Reports malformed request payloads and parameters as
/// '422 Unprocessable Entity' with the JSON error envelope.
///
/// Wrap an extractor in [axum_extra::extract::WithRejection] with this type
/// to opt a handler in, e.g.
/// `WithRejection<Json<SearchRequest>, ApiRejection>`.
#[derive(Debug)]
pub struct ApiRejection(String);

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl From<PathRejection> for ApiRejection {
    fn from(rejection: PathRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(self.0)),
        )
            .into_response()
    }
}
