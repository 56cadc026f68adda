//! Insertion-ordered in-memory quiz store.
//!
//! The registry is append-only: quizzes are added wholesale and never
//! mutated or removed. All lookups are linear scans in insertion
//! order.

use crate::model::{Answer, Category, Quiz};
use crate::report::RegistrySummary;

/// An in-memory, insertion-ordered collection of quizzes.
///
/// Duplicate ids are permitted; id lookups return the first match in
/// insertion order. The registry is unguarded single-writer,
/// single-reader state — sharing one across threads is the caller's
/// problem.
#[derive(Debug, Clone, Default)]
pub struct QuizRegistry {
    quizzes: Vec<Quiz>,
}

impl QuizRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quiz. No duplicate-id check: a second quiz with the
    /// same id coexists with the first.
    pub fn insert(&mut self, quiz: Quiz) {
        tracing::debug!(quiz_id = %quiz.id, category = %quiz.category, "quiz inserted");
        self.quizzes.push(quiz);
    }

    /// First quiz in insertion order with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// All quizzes with the given category, in insertion order.
    /// An empty vec (not `None`) when nothing matches.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Quiz> {
        self.quizzes
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    /// Answers of the quiz with the given id.
    ///
    /// `None` means no such quiz; `Some` of an empty slice means the
    /// quiz exists with zero answers. Callers must keep the two
    /// distinct.
    pub fn answers_for(&self, id: &str) -> Option<&[Answer]> {
        self.find_by_id(id).map(|q| q.answers.as_slice())
    }

    /// Render the answer-count summary, one line per quiz in
    /// insertion order. An empty registry renders the empty string.
    pub fn summary_text(&self) -> String {
        RegistrySummary::from_registry(self).to_text()
    }

    /// Number of quizzes stored.
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// `true` when no quiz has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Iterate quizzes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: &str, category: Category, answers: Vec<Answer>) -> Quiz {
        Quiz {
            id: id.into(),
            title: format!("Quiz {id}"),
            questions: vec![],
            answers,
            category,
            created_at: None,
        }
    }

    fn answer(id: u32, text: &str) -> Answer {
        Answer {
            id,
            text: text.into(),
        }
    }

    #[test]
    fn insert_appends_in_order() {
        let mut registry = QuizRegistry::new();
        assert!(registry.is_empty());

        registry.insert(quiz("a", Category::Sport, vec![]));
        registry.insert(quiz("b", Category::Music, vec![]));
        registry.insert(quiz("c", Category::Movies, vec![]));

        assert_eq!(registry.len(), 3);
        let ids: Vec<&str> = registry.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn find_by_id_missing_returns_none() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("a", Category::Sport, vec![]));
        assert!(registry.find_by_id("never-inserted").is_none());
    }

    #[test]
    fn find_by_id_duplicate_returns_first() {
        let mut registry = QuizRegistry::new();
        let mut first = quiz("dup", Category::Sport, vec![]);
        first.title = "First".into();
        let mut second = quiz("dup", Category::Music, vec![]);
        second.title = "Second".into();

        registry.insert(first);
        registry.insert(second);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_id("dup").unwrap().title, "First");
    }

    #[test]
    fn filter_by_category_keeps_insertion_order() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("a", Category::Sport, vec![]));
        registry.insert(quiz("b", Category::Music, vec![]));
        registry.insert(quiz("c", Category::Sport, vec![]));

        let sport = registry.filter_by_category(Category::Sport);
        let ids: Vec<&str> = sport.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filter_by_category_no_matches_is_empty_not_absent() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("a", Category::Sport, vec![]));
        registry.insert(quiz("b", Category::Music, vec![]));

        let movies = registry.filter_by_category(Category::Movies);
        assert!(movies.is_empty());
    }

    #[test]
    fn answers_for_distinguishes_missing_from_empty() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("empty", Category::Movies, vec![]));

        assert!(registry.answers_for("missing").is_none());

        let answers = registry.answers_for("empty").unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn summary_has_one_line_per_quiz() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("a", Category::Sport, vec![answer(1, "x")]));
        registry.insert(quiz("b", Category::Music, vec![]));
        registry.insert(quiz("c", Category::Movies, vec![answer(1, "y"), answer(2, "z")]));

        let text = registry.summary_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Quiz ID: a, Answers Count: 1");
        assert_eq!(lines[1], "Quiz ID: b, Answers Count: 0");
        assert_eq!(lines[2], "Quiz ID: c, Answers Count: 2");
    }

    #[test]
    fn summary_of_empty_registry_is_empty_string() {
        let registry = QuizRegistry::new();
        assert_eq!(registry.summary_text(), "");
    }

    #[test]
    fn worked_example() {
        let mut registry = QuizRegistry::new();
        registry.insert(Quiz {
            id: "q1".into(),
            title: "Football quiz".into(),
            questions: vec!["Who won 2018?".into()],
            answers: vec![answer(1, "France")],
            category: Category::Sport,
            created_at: None,
        });

        let found = registry.find_by_id("q1").unwrap();
        assert_eq!(found.title, "Football quiz");

        let sport = registry.filter_by_category(Category::Sport);
        assert_eq!(sport.len(), 1);
        assert_eq!(sport[0].id, "q1");

        let answers = registry.answers_for("q1").unwrap();
        assert_eq!(answers, [answer(1, "France")]);

        assert_eq!(registry.summary_text(), "Quiz ID: q1, Answers Count: 1");
    }
}
