//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/questions/{question_id}',
//! use [format_endpoint].

/// The route to list all categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to list questions (GET) and search question text (POST).
pub const QUESTIONS: &str = "/api/questions";
/// The route to create a question.
pub const QUESTION: &str = "/api/question";
/// The route to delete a question.
pub const DELETE_QUESTION: &str = "/api/questions/{question_id}";
/// The route to list the questions belonging to a category.
pub const CATEGORY_QUESTIONS: &str = "/api/categories/{category_id}/questions";
/// The route to fetch a random question for quiz play.
pub const QUIZZES: &str = "/api/quizzes";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/questions/{question_id}',
/// '{question_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES);
        assert_endpoint_is_valid_uri(endpoints::QUESTIONS);
        assert_endpoint_is_valid_uri(endpoints::QUESTION);
        assert_endpoint_is_valid_uri(endpoints::DELETE_QUESTION);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY_QUESTIONS);
        assert_endpoint_is_valid_uri(endpoints::QUIZZES);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::DELETE_QUESTION, 1);

        assert_eq!(formatted_path, "/api/questions/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::CATEGORY_QUESTIONS, 2);

        assert_eq!(formatted_path, "/api/categories/2/questions");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::QUESTIONS, 1);

        assert_eq!(formatted_path, "/api/questions");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
