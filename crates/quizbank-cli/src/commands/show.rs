//! The `quizbank show` command.

use anyhow::Result;

use crate::demo;

pub fn execute(id: String) -> Result<()> {
    let registry = demo::demo_registry();

    // Absence is a normal outcome here, not a failure.
    match registry.find_by_id(&id) {
        Some(quiz) => println!("{}", serde_json::to_string_pretty(quiz)?),
        None => println!("No quiz with id '{id}'."),
    }

    Ok(())
}
