//! The question creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    question::{NewQuestion, QuestionId, insert_question},
    rejection::ApiRejection,
};

/// The state needed for creating a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateQuestionRequest {
    id: Option<QuestionId>,
    question: String,
    answer: String,
    category: String,
    difficulty: i64,
}

#[derive(Debug, Serialize)]
struct CreateQuestionResponse {
    success: bool,
}

/// Handle question creation.
///
/// The database assigns question IDs: a request that supplies one is refused
/// before touching storage.
pub async fn create_question_endpoint(
    State(state): State<CreateQuestionState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateQuestionRequest>, ApiRejection>,
) -> Response {
    if request.id.is_some() {
        return Error::QuestionIdConflict.into_response();
    }

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let new_question = NewQuestion {
        question: request.question,
        answer: request.answer,
        category: request.category,
        difficulty: request.difficulty,
    };

    match insert_question(new_question, &connection) {
        Ok(_) => Json(CreateQuestionResponse { success: true }).into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a question: {error}");
            error.into_response()
        }
    }
}
