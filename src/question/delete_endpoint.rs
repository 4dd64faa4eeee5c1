//! The question deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    question::{QuestionId, delete_question},
    rejection::ApiRejection,
};

/// The state needed for deleting a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteQuestionResponse {
    success: bool,
}

/// Handle question deletion.
///
/// Deleting an ID that is not in the database reports `{"success": false}`
/// with a 400 status rather than an error envelope.
pub async fn delete_question_endpoint(
    State(state): State<DeleteQuestionState>,
    WithRejection(Path(question_id), _): WithRejection<Path<QuestionId>, ApiRejection>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_question(question_id, &connection) {
        Ok(rows_affected) if rows_affected != 0 => {
            Json(DeleteQuestionResponse { success: true }).into_response()
        }
        Ok(_) => (
            StatusCode::BAD_REQUEST,
            Json(DeleteQuestionResponse { success: false }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting question {question_id}: {error}"
            );
            error.into_response()
        }
    }
}
