//! The quiz play endpoint: serves random questions that have not been seen
//! yet this session.
//!
//! Clients track the questions they have already been served and send the IDs
//! back with each request; the server holds no session state.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState, Error,
    question::{Question, QuestionId, get_random_question},
    rejection::ApiRejection,
};

/// The category ID that draws questions from every category.
const ALL_CATEGORIES_ID: i64 = 0;

/// The message returned when no quiz question can be served.
const POOL_EXHAUSTED_MESSAGE: &str =
    "No more questions or cannot load questions of the given category";

/// The state needed for playing a quiz.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The category filter sent by quiz clients.
///
/// Clients send the whole category object; only the ID matters here and
/// unknown sibling fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct QuizCategory {
    #[serde(default)]
    id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<QuestionId>,
    #[serde(default)]
    quiz_category: QuizCategory,
}

#[derive(Debug, Serialize)]
struct QuizResponse {
    question: Question,
}

/// Handle requests for the next quiz question.
///
/// Questions listed in `previous_questions` are excluded from the draw, and a
/// category ID of zero draws from every category. When every candidate has
/// been excluded the response is a 400 with an empty question object and a
/// fixed message.
pub async fn post_quizzes_endpoint(
    State(state): State<QuizState>,
    WithRejection(Json(request), _): WithRejection<Json<QuizRequest>, ApiRejection>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let category_id = (request.quiz_category.id != ALL_CATEGORIES_ID)
        .then(|| request.quiz_category.id.to_string());

    match get_random_question(
        &request.previous_questions,
        category_id.as_deref(),
        &connection,
    ) {
        Ok(Some(question)) => Json(QuizResponse { question }).into_response(),
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "question": {},
                "message": POOL_EXHAUSTED_MESSAGE,
            })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while picking a quiz question: {error}");
            error.into_response()
        }
    }
}
