//! The `quizbank list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbank_core::model::{Category, Quiz};

use crate::demo;

pub fn execute(category: Option<Category>, format: String) -> Result<()> {
    let registry = demo::demo_registry();

    let quizzes: Vec<&Quiz> = match category {
        Some(category) => registry.filter_by_category(category),
        None => registry.iter().collect(),
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&quizzes)?);
        }
        _ => {
            // table format
            let mut table = Table::new();
            table.set_header(vec![
                "ID", "Title", "Category", "Questions", "Answers", "Created",
            ]);

            for quiz in &quizzes {
                table.add_row(vec![
                    Cell::new(&quiz.id),
                    Cell::new(&quiz.title),
                    Cell::new(quiz.category),
                    Cell::new(quiz.questions.len()),
                    Cell::new(quiz.answers.len()),
                    Cell::new(
                        quiz.created_at
                            .map(|t| t.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                ]);
            }

            println!("{table}");
        }
    }

    Ok(())
}
