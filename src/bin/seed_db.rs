use std::env;
use std::error::Error;
use std::path::Path;
use std::process::exit;

use rusqlite::Connection;

use trivia_rs::initialize_db;

/// Create and populate a database with a starter set of trivia questions.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_path>", &args[0]);
        exit(1);
    }

    let output_path = Path::new(&args[1]);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating categories...");

    for name in [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ] {
        conn.execute("INSERT INTO category (name) VALUES (?1)", (&name,))?;
    }

    println!("Creating questions...");

    // The category column holds the category ID as text.
    let questions = [
        (
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            "4",
            2,
        ),
        (
            "What boxer's original name is Cassius Clay?",
            "Muhammad Ali",
            "4",
            1,
        ),
        (
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            "5",
            4,
        ),
        (
            "What is the largest lake in Africa?",
            "Lake Victoria",
            "3",
            2,
        ),
        (
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            "3",
            3,
        ),
        (
            "The Taj Mahal is located in which Indian city?",
            "Agra",
            "3",
            2,
        ),
        (
            "Which Dutch graphic artist's work, initials M C, was hugely popular with optical illusion enthusiasts?",
            "Escher",
            "2",
            1,
        ),
        ("La Giaconda is better known as what?", "Mona Lisa", "2", 3),
        (
            "How many paintings did Van Gogh sell in his lifetime?",
            "One",
            "2",
            4,
        ),
        (
            "What is the heaviest organ in the human body?",
            "The Liver",
            "1",
            4,
        ),
        ("Who discovered penicillin?", "Alexander Fleming", "1", 3),
        (
            "Which country won the first ever soccer World Cup in 1930?",
            "Uruguay",
            "6",
            4,
        ),
        (
            "Which is the only team to play in every soccer World Cup tournament?",
            "Brazil",
            "6",
            3,
        ),
    ];

    for (question, answer, category, difficulty) in questions {
        conn.execute(
            "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
            (question, answer, category, difficulty),
        )?;
    }

    println!("Done.");

    Ok(())
}
