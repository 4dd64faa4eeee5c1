//! Core question domain types.

use serde::Serialize;

/// Database identifier for a question.
pub type QuestionId = i64;

/// A single trivia item.
///
/// Serializes to the wire format used by question listings, search results
/// and quiz responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    /// The id for the question.
    pub id: QuestionId,
    /// The prompt shown to players.
    pub question: String,
    /// The accepted answer.
    pub answer: String,
    /// The id of the category this question belongs to, stored as a string.
    ///
    /// Categories are referenced by string comparison only. A value that does
    /// not name an existing category is tolerated and simply matches nothing.
    pub category: String,
    /// How hard the question is, as a small integer rating.
    pub difficulty: i64,
}

/// The caller-supplied fields of a question, before the database assigns an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}
