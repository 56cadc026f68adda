//! Built-in demo data.
//!
//! Every subcommand operates on this seeded registry; the CLI reads
//! nothing from disk.

use chrono::{TimeZone, Utc};

use quizbank_core::model::{Answer, Category, Quiz};
use quizbank_core::registry::QuizRegistry;

/// Seed the registry the subcommands render.
pub fn demo_registry() -> QuizRegistry {
    let mut registry = QuizRegistry::new();

    registry.insert(Quiz {
        id: "q1".into(),
        title: "Football quiz".into(),
        questions: vec!["Who won 2018?".into()],
        answers: vec![Answer {
            id: 1,
            text: "France".into(),
        }],
        category: Category::Sport,
        created_at: Utc.with_ymd_and_hms(2024, 5, 12, 9, 30, 0).single(),
    });

    registry.insert(Quiz {
        id: "q2".into(),
        title: "Guitar legends".into(),
        questions: vec![
            "Who played the Woodstock '69 anthem?".into(),
            "Which band recorded 'Wish You Were Here'?".into(),
        ],
        answers: vec![
            Answer {
                id: 1,
                text: "Jimi Hendrix".into(),
            },
            Answer {
                id: 2,
                text: "Pink Floyd".into(),
            },
        ],
        category: Category::Music,
        created_at: Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).single(),
    });

    // No answers recorded yet; the summary must still list it with 0.
    registry.insert(Quiz {
        id: "q3".into(),
        title: "Cult classics".into(),
        questions: vec!["Who directed Pulp Fiction?".into()],
        answers: vec![],
        category: Category::Movies,
        created_at: None,
    });

    tracing::debug!(count = registry.len(), "demo registry seeded");
    registry
}
