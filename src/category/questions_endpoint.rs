//! The per-category question listing endpoint.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{category_map, get_category},
    pagination::PaginationConfig,
    question::{Question, get_questions_for_category},
};

/// The state needed for listing a category's questions.
#[derive(Debug, Clone)]
pub struct CategoryQuestionsState {
    pub pagination: PaginationConfig,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            pagination: state.pagination.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionsResponse {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
    categories: BTreeMap<String, String>,
}

/// Handle requests for the first page of questions in one category.
///
/// The path parameter is compared against the stored category reference as a
/// string, and `categories` is restricted to the requested category (empty
/// when no such category exists).
pub async fn get_category_questions_endpoint(
    State(state): State<CategoryQuestionsState>,
    Path(category_id): Path<String>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let questions =
        get_questions_for_category(&category_id, state.pagination.page_size, 0, &connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve questions: {error}"))?;

    let matching_category = get_category(&category_id, &connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve category: {error}"))?;

    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        questions,
        total_questions,
        current_category: category_id,
        categories: category_map(matching_category.into_iter().collect()),
    })
    .into_response())
}
