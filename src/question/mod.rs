//! Question management: listing, creating, deleting and searching questions.

mod create_endpoint;
mod db;
mod delete_endpoint;
mod domain;
mod list_endpoint;
mod search_endpoint;

pub use create_endpoint::create_question_endpoint;
pub use db::{
    create_question_table, delete_question, get_questions_for_category, get_random_question,
    insert_question, search_questions,
};
pub use delete_endpoint::delete_question_endpoint;
pub use domain::{NewQuestion, Question, QuestionId};
pub use list_endpoint::get_questions_endpoint;
pub use search_endpoint::search_questions_endpoint;
