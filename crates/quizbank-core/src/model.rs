//! Core data model types for quizbank.
//!
//! These are the record types the registry stores: quizzes, the
//! answers attached to them, and the fixed set of quiz categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single candidate or submitted response attached to a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer identifier, unique by convention only.
    pub id: u32,
    /// Answer text.
    pub text: String,
}

/// A quiz record.
///
/// Quizzes are created by the caller and added to a registry
/// wholesale; they are never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Identifier, unique by convention; duplicates are not rejected.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Question texts, in presentation order.
    #[serde(default)]
    pub questions: Vec<String>,
    /// Answers recorded against this quiz.
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Subject category.
    pub category: Category,
    /// When the quiz was created, if known.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The fixed set of quiz subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sport,
    Music,
    Movies,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sport => write!(f, "sport"),
            Category::Music => write!(f, "music"),
            Category::Movies => write!(f, "movies"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sport" => Ok(Category::Sport),
            "music" => Ok(Category::Music),
            "movies" => Ok(Category::Movies),
            other => Err(format!("unknown category: {other}")),
        }
    }
}
