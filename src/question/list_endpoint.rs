//! The paginated question listing endpoint.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::{category_map, get_all_categories},
    pagination::{PaginationConfig, page_offset},
    question::{Question, get_questions_for_category},
    rejection::ApiRejection,
};

/// The category to list when a request does not specify one.
const DEFAULT_CATEGORY_ID: &str = "1";

/// The state needed for listing questions.
#[derive(Debug, Clone)]
pub struct ListQuestionsState {
    pub pagination: PaginationConfig,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            pagination: state.pagination.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuestionsParams {
    page: Option<u64>,
    category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionListResponse {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
    categories: BTreeMap<String, String>,
}

/// Handle requests for one page of questions in a category.
///
/// `totalQuestions` is the number of questions on the returned page, not the
/// size of the whole result set. Clients page forward until they receive an
/// empty page.
pub async fn get_questions_endpoint(
    State(state): State<ListQuestionsState>,
    WithRejection(Query(params), _): WithRejection<Query<ListQuestionsParams>, ApiRejection>,
) -> Result<Response, Error> {
    let page = params.page.unwrap_or(state.pagination.default_page);
    let category = params
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY_ID.to_string());
    let offset = page_offset(page, state.pagination.page_size);

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let questions =
        get_questions_for_category(&category, state.pagination.page_size, offset, &connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve questions: {error}"))?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    let total_questions = questions.len();

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        current_category: category,
        categories: category_map(categories),
    })
    .into_response())
}

#[cfg(test)]
mod get_questions_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, PaginationConfig, build_router,
        category::insert_category,
        endpoints,
        question::{NewQuestion, insert_question},
    };

    fn get_test_server() -> (TestServer, Arc<Mutex<Connection>>) {
        let state = AppState::new(
            Connection::open_in_memory().expect("Could not open in-memory SQLite database"),
            PaginationConfig::default(),
        )
        .expect("Could not create app state");
        let db_connection = state.db_connection.clone();
        let server = TestServer::new(build_router(state)).expect("Could not create test server.");

        (server, db_connection)
    }

    fn insert_test_question(question: &str, category: &str, connection: &Connection) {
        insert_question(
            NewQuestion {
                question: question.to_string(),
                answer: "Answer".to_string(),
                category: category.to_string(),
                difficulty: 1,
            },
            connection,
        )
        .expect("Could not create test question");
    }

    #[tokio::test]
    async fn defaults_to_first_page_of_first_category() {
        let (server, db_connection) = get_test_server();
        {
            let connection = db_connection.lock().unwrap();
            insert_category("Science", &connection).unwrap();
            insert_test_question("Why is the sky blue?", "1", &connection);
            insert_test_question("Who painted the Mona Lisa?", "2", &connection);
        }

        let response = server.get(endpoints::QUESTIONS).await;

        response.assert_status_ok();
        let got: Value = response.json();
        assert_eq!(got["totalQuestions"], json!(1));
        assert_eq!(got["currentCategory"], json!("1"));
        assert_eq!(got["categories"], json!({"1": "Science"}));
        assert_eq!(got["questions"][0]["question"], json!("Why is the sky blue?"));
    }

    #[tokio::test]
    async fn total_questions_counts_the_returned_page_only() {
        let (server, db_connection) = get_test_server();
        {
            let connection = db_connection.lock().unwrap();
            insert_category("Science", &connection).unwrap();
            for i in 0..12 {
                insert_test_question(&format!("Question {i}?"), "1", &connection);
            }
        }

        let first_page = server.get(endpoints::QUESTIONS).await;
        first_page.assert_status_ok();
        let got: Value = first_page.json();
        assert_eq!(got["totalQuestions"], json!(10));

        let second_page = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", 2)
            .await;
        second_page.assert_status_ok();
        let got: Value = second_page.json();
        assert_eq!(got["totalQuestions"], json!(2));
        assert_eq!(got["questions"][0]["question"], json!("Question 10?"));
    }

    #[tokio::test]
    async fn page_beyond_the_data_returns_empty_list() {
        let (server, db_connection) = get_test_server();
        {
            let connection = db_connection.lock().unwrap();
            insert_test_question("Why is the sky blue?", "1", &connection);
        }

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", 99)
            .await;

        response.assert_status_ok();
        let got: Value = response.json();
        assert_eq!(got["questions"], json!([]));
        assert_eq!(got["totalQuestions"], json!(0));
    }

    #[tokio::test]
    async fn category_param_selects_the_category() {
        let (server, db_connection) = get_test_server();
        {
            let connection = db_connection.lock().unwrap();
            insert_test_question("Why is the sky blue?", "1", &connection);
            insert_test_question("Who painted the Mona Lisa?", "2", &connection);
        }

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("category", "2")
            .await;

        response.assert_status_ok();
        let got: Value = response.json();
        assert_eq!(got["currentCategory"], json!("2"));
        assert_eq!(got["totalQuestions"], json!(1));
        assert_eq!(
            got["questions"][0]["question"],
            json!("Who painted the Mona Lisa?")
        );
    }

    #[tokio::test]
    async fn non_integer_page_is_unprocessable() {
        let (server, _db_connection) = get_test_server();

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", "one")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let got: Value = response.json();
        assert_eq!(got["success"], json!(false));
    }
}
