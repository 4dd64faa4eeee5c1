//! Application router configuration and the CORS layers applied to every
//! route.

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    category::{get_categories_endpoint, get_category_questions_endpoint},
    endpoints,
    not_found::get_404_not_found,
    question::{
        create_question_endpoint, delete_question_endpoint, get_questions_endpoint,
        search_questions_endpoint,
    },
    quiz::post_quizzes_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint).post(search_questions_endpoint),
        )
        .route(endpoints::QUESTION, post(create_question_endpoint))
        .route(endpoints::DELETE_QUESTION, delete(delete_question_endpoint))
        .route(endpoints::QUIZZES, post(post_quizzes_endpoint))
        .fallback(get_404_not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(set_credentials_header))
        .with_state(state)
}

/// Add the `Access-Control-Allow-Credentials` header to every response.
///
/// `CorsLayer` panics when credentials are enabled alongside wildcard
/// origins, so the header is attached by hand. This middleware sits outside
/// the CORS layer so that preflight responses get the header too.
async fn set_credentials_header(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    response
}
