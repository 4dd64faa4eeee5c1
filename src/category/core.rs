use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::Error;

pub type CategoryId = i64;

/// A named grouping that trivia questions belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// The id for the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
}

pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_category(row: &rusqlite::Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Category { id, name })
}

/// Create a category and return it with its generated ID.
///
/// Categories are managed directly in the database, there is no HTTP endpoint
/// for creating them.
pub fn insert_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO category (name) VALUES (?1)", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: name.to_owned(),
    })
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM category ORDER BY id ASC")?
        .query_map([], map_row_to_category)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the category named by `category_id`, a stringified ID.
///
/// Returns `Ok(None)` when the string does not name an existing category,
/// including strings that are not well-formed IDs.
pub fn get_category(category_id: &str, connection: &Connection) -> Result<Option<Category>, Error> {
    let result = connection
        .prepare("SELECT id, name FROM category WHERE id = ?1")?
        .query_row((category_id,), map_row_to_category);

    match result {
        Ok(category) => Ok(Some(category)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Build the wire format for categories: a map from stringified ID to name.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<String, String> {
    categories
        .into_iter()
        .map(|category| (category.id.to_string(), category.name))
        .collect()
}
