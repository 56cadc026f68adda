//! Answer-count summary reporting over a registry.

use serde::{Deserialize, Serialize};

use crate::registry::QuizRegistry;

/// Answer count for a single quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Id of the summarized quiz.
    pub quiz_id: String,
    /// Number of answers recorded against it.
    pub answer_count: usize,
}

/// Per-quiz answer counts, in registry insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySummary {
    /// One entry per quiz.
    pub quizzes: Vec<QuizSummary>,
}

impl RegistrySummary {
    /// Snapshot the per-quiz answer counts of a registry.
    pub fn from_registry(registry: &QuizRegistry) -> Self {
        let quizzes = registry
            .iter()
            .map(|q| QuizSummary {
                quiz_id: q.id.clone(),
                answer_count: q.answers.len(),
            })
            .collect();
        Self { quizzes }
    }

    /// Render as plain text: one `Quiz ID: <id>, Answers Count: <n>`
    /// line per quiz, joined by newlines. An empty summary renders as
    /// the empty string.
    pub fn to_text(&self) -> String {
        self.quizzes
            .iter()
            .map(|s| format!("Quiz ID: {}, Answers Count: {}", s.quiz_id, s.answer_count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
