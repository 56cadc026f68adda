//! Standalone sample-question shapes for the demo output.
//!
//! These types mirror the loose question records the CLI prints as
//! demo data. They are unrelated to the registry's [`Quiz`] records
//! and carry no behavior beyond their serialized shape.
//!
//! [`Quiz`]: crate::model::Quiz

use serde::{Deserialize, Serialize};

/// A standalone demo question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleQuestion {
    /// Question identifier.
    pub id: u32,
    /// Question text.
    pub question: String,
    /// Candidate options.
    pub options: OptionList,
    /// The expected answer.
    pub answer: AnswerKey,
}

/// Options for a sample question: all text or all numeric.
///
/// Serialized as a plain JSON array either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionList {
    Texts(Vec<String>),
    Numbers(Vec<i64>),
}

/// The expected answer: a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Text(String),
    Number(i64),
    Many(Vec<AnswerValue>),
}

/// One element of a list-valued answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(i64),
}

/// The two demo questions printed by `quizbank samples`.
pub fn demo_questions() -> Vec<SampleQuestion> {
    vec![
        SampleQuestion {
            id: 1,
            question: "Which country hosted the 2018 FIFA World Cup?".into(),
            options: OptionList::Texts(vec![
                "Russia".into(),
                "Brazil".into(),
                "Germany".into(),
                "Qatar".into(),
            ]),
            answer: AnswerKey::Text("Russia".into()),
        },
        SampleQuestion {
            id: 2,
            question: "Pick every prime number.".into(),
            options: OptionList::Numbers(vec![4, 7, 9, 11]),
            answer: AnswerKey::Many(vec![AnswerValue::Number(7), AnswerValue::Number(11)]),
        },
    ]
}
