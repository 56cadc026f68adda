//! The `quizbank samples` command.

use anyhow::Result;

use quizbank_core::sample;

pub fn execute() -> Result<()> {
    let questions = sample::demo_questions();
    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}
