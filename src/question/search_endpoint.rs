//! The question search endpoint.

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
    pagination::PaginationConfig,
    question::{Question, search_questions},
    rejection::ApiRejection,
};

/// The state needed for searching questions.
#[derive(Debug, Clone)]
pub struct SearchQuestionsState {
    pub pagination: PaginationConfig,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SearchQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            pagination: state.pagination.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    /// The substring to look for. Omitting it matches every question.
    #[serde(rename = "searchTerm", default)]
    search_term: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    questions: Vec<Question>,
    total_questions: usize,
    /// Always null: search is not scoped to a category.
    current_category: Option<String>,
}

/// Handle question text search.
pub async fn search_questions_endpoint(
    State(state): State<SearchQuestionsState>,
    WithRejection(Json(request), _): WithRejection<Json<SearchRequest>, ApiRejection>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let questions = search_questions(&request.search_term, state.pagination.page_size, &connection)
        .inspect_err(|error| tracing::error!("Failed to search questions: {error}"))?;

    let total_questions = questions.len();

    Ok(Json(SearchResponse {
        questions,
        total_questions,
        current_category: None,
    })
    .into_response())
}
