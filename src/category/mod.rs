//! Category browsing for trivia questions.

mod core;
mod list_endpoint;
mod questions_endpoint;

pub use core::{
    Category, CategoryId, category_map, create_category_table, get_all_categories, get_category,
    insert_category,
};
pub use list_endpoint::get_categories_endpoint;
pub use questions_endpoint::get_category_questions_endpoint;
