//! The `quizbank summary` command.

use anyhow::Result;

use quizbank_core::report::RegistrySummary;

use crate::demo;

pub fn execute(format: String) -> Result<()> {
    let registry = demo::demo_registry();
    let summary = RegistrySummary::from_registry(&registry);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            // text format
            println!("{}", summary.to_text());
        }
    }

    Ok(())
}
