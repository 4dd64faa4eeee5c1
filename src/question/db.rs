//! Database operations for trivia questions.

use rusqlite::{Connection, Row, params_from_iter, types::Value};

use crate::{
    Error,
    question::{NewQuestion, Question, QuestionId},
};

/// Create a question and return it with its generated ID.
pub fn insert_question(
    new_question: NewQuestion,
    connection: &Connection,
) -> Result<Question, Error> {
    connection.execute(
        "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
        (
            &new_question.question,
            &new_question.answer,
            &new_question.category,
            new_question.difficulty,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Question {
        id,
        question: new_question.question,
        answer: new_question.answer,
        category: new_question.category,
        difficulty: new_question.difficulty,
    })
}

/// Delete a question by ID, returning the number of rows removed.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<usize, Error> {
    let rows_affected = connection.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    Ok(rows_affected)
}

/// Retrieve one page of the questions whose category reference equals
/// `category`.
///
/// The stored category is a string, so the comparison is string equality.
pub fn get_questions_for_category(
    category: &str,
    limit: u64,
    offset: u64,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE category = ?1
            ORDER BY id ASC
            LIMIT {limit} OFFSET {offset}"
        ))?
        .query_map((category,), map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the first `limit` questions whose text contains `search_term`.
///
/// Matching is case-insensitive for ASCII text (SQLite `LIKE`). An empty
/// search term matches every question.
pub fn search_questions(
    search_term: &str,
    limit: u64,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE question LIKE '%' || ?1 || '%'
            ORDER BY id ASC
            LIMIT {limit}"
        ))?
        .query_map((search_term,), map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Pick a uniformly random question, excluding `previous_questions` and, when
/// `category` is given, restricting the draw to that category.
///
/// Returns `Ok(None)` when every candidate has been excluded or the category
/// matches no questions.
pub fn get_random_question(
    previous_questions: &[QuestionId],
    category: Option<&str>,
    connection: &Connection,
) -> Result<Option<Question>, Error> {
    let mut query_string =
        String::from("SELECT id, question, answer, category, difficulty FROM question");
    let mut where_clause_parts = Vec::new();
    let mut query_parameters: Vec<Value> = Vec::new();

    // NOT IN () is invalid SQL, skip the clause when there is nothing to exclude.
    if !previous_questions.is_empty() {
        let placeholders = (1..=previous_questions.len())
            .map(|position| format!("?{position}"))
            .collect::<Vec<_>>()
            .join(", ");
        where_clause_parts.push(format!("id NOT IN ({placeholders})"));
        query_parameters.extend(previous_questions.iter().map(|id| Value::Integer(*id)));
    }

    if let Some(category) = category {
        where_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
        query_parameters.push(Value::Text(category.to_owned()));
    }

    if !where_clause_parts.is_empty() {
        query_string.push_str(" WHERE ");
        query_string.push_str(&where_clause_parts.join(" AND "));
    }

    query_string.push_str(" ORDER BY RANDOM() LIMIT 1");

    let result = connection
        .prepare(&query_string)?
        .query_row(params_from_iter(query_parameters.iter()), map_row);

    match result {
        Ok(question) => Ok(Some(question)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Initialize the question table and indexes.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL,
            difficulty INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    let id = row.get(0)?;
    let question = row.get(1)?;
    let answer = row.get(2)?;
    let category = row.get(3)?;
    let difficulty = row.get(4)?;

    Ok(Question {
        id,
        question,
        answer,
        category,
        difficulty,
    })
}

#[cfg(test)]
mod question_query_tests {
    use rusqlite::Connection;

    use crate::question::{NewQuestion, Question};

    use super::{
        create_question_table, delete_question, get_questions_for_category, insert_question,
        search_questions,
    };

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_question_table(&connection).expect("Could not create question table");
        connection
    }

    fn insert_test_question(question: &str, category: &str, connection: &Connection) -> Question {
        insert_question(
            NewQuestion {
                question: question.to_string(),
                answer: "Answer".to_string(),
                category: category.to_string(),
                difficulty: 1,
            },
            connection,
        )
        .expect("Could not create test question")
    }

    #[test]
    fn insert_question_succeeds() {
        let connection = get_test_db_connection();
        let new_question = NewQuestion {
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"
                .to_string(),
            answer: "Maya Angelou".to_string(),
            category: "4".to_string(),
            difficulty: 2,
        };

        let question =
            insert_question(new_question.clone(), &connection).expect("Could not create question");

        assert!(question.id > 0);
        assert_eq!(question.question, new_question.question);
        assert_eq!(question.answer, new_question.answer);
        assert_eq!(question.category, new_question.category);
        assert_eq!(question.difficulty, new_question.difficulty);
    }

    #[test]
    fn delete_question_removes_one_row() {
        let connection = get_test_db_connection();
        let question = insert_test_question("What?", "1", &connection);

        let rows_affected = delete_question(question.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        let remaining = get_questions_for_category("1", 10, 0, &connection).unwrap();
        assert_eq!(remaining, vec![]);
    }

    #[test]
    fn delete_question_with_unused_id_removes_nothing() {
        let connection = get_test_db_connection();
        insert_test_question("What?", "1", &connection);

        let rows_affected = delete_question(999, &connection).unwrap();

        assert_eq!(rows_affected, 0);
    }

    #[test]
    fn get_questions_for_category_filters_by_string_equality() {
        let connection = get_test_db_connection();
        let want = vec![
            insert_test_question("Why is the sky blue?", "1", &connection),
            insert_test_question("Why is grass green?", "1", &connection),
        ];
        insert_test_question("Who painted the Mona Lisa?", "2", &connection);

        let got = get_questions_for_category("1", 10, 0, &connection).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn get_questions_for_category_applies_limit_and_offset() {
        let connection = get_test_db_connection();
        let mut inserted = Vec::new();
        for i in 0..12 {
            inserted.push(insert_test_question(&format!("Question {i}?"), "1", &connection));
        }

        let first_page = get_questions_for_category("1", 10, 0, &connection).unwrap();
        let second_page = get_questions_for_category("1", 10, 10, &connection).unwrap();

        assert_eq!(first_page, inserted[..10]);
        assert_eq!(second_page, inserted[10..]);
    }

    #[test]
    fn search_questions_matches_substring_case_insensitively() {
        let connection = get_test_db_connection();
        let want = vec![
            insert_test_question("How many paintings did Van Gogh sell?", "2", &connection),
            insert_test_question("MANY hands make light work, but whose?", "4", &connection),
        ];
        insert_test_question("Who painted the Mona Lisa?", "2", &connection);

        let got = search_questions("many", 10, &connection).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn search_questions_with_no_matches_returns_empty_vec() {
        let connection = get_test_db_connection();
        insert_test_question("Who painted the Mona Lisa?", "2", &connection);

        let got = search_questions("cricket", 10, &connection).unwrap();

        assert_eq!(got, vec![]);
    }

    #[test]
    fn search_questions_with_empty_term_matches_everything() {
        let connection = get_test_db_connection();
        let want = vec![
            insert_test_question("Who painted the Mona Lisa?", "2", &connection),
            insert_test_question("What is the capital of France?", "3", &connection),
        ];

        let got = search_questions("", 10, &connection).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn search_questions_returns_at_most_limit_rows() {
        let connection = get_test_db_connection();
        for i in 0..12 {
            insert_test_question(&format!("Question {i}?"), "1", &connection);
        }

        let got = search_questions("Question", 10, &connection).unwrap();

        assert_eq!(got.len(), 10);
    }
}
