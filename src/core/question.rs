//! Question definitions and content validation
//!
//! Questions are passive, immutable data built by the content layer.
//! The only behavior here is `validate`, which enforces the invariants
//! the session relies on (answers reference real options, ordering
//! answers are full permutations). Scenario, explanation, hint, and
//! reference texts are display metadata and never touch scoring.

use crate::types::{QuestionKind, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// One selectable option (or ordering step) of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    /// Optional illustration reference, unused by the terminal front end
    pub image_ref: Option<String>,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        QuestionOption {
            id: id.into(),
            text: text.into(),
            image_ref: None,
        }
    }
}

/// Canonical correct answer, shaped by question kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswer {
    /// Choice and situation questions: one option id
    Single(String),
    /// Ordering questions: every option id exactly once, in order
    Sequence(Vec<String>),
}

/// A player submission, shaped by how the answer was produced
///
/// `Blank` is the sentinel used when a countdown expires with no
/// submission; it never matches any correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedAnswer {
    Single(String),
    Sequence(Vec<String>),
    Blank,
}

impl SubmittedAnswer {
    pub fn is_blank(&self) -> bool {
        matches!(self, SubmittedAnswer::Blank)
    }
}

/// Immutable description of one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    /// Category label (e.g. "belay", "knots"), display only
    pub category: Option<String>,
    /// 1..=3, display only
    pub difficulty: u8,
    pub prompt: String,
    pub scenario: Option<String>,
    pub options: Vec<QuestionOption>,
    pub answer: CorrectAnswer,
    pub explanation: Option<String>,
    pub hint: Option<String>,
    pub reference_sources: Vec<String>,
}

impl Question {
    /// Look up an option by id
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == id)
    }

    fn has_option(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }

    /// Check the content invariants. Runs at load time and again in
    /// `start` before a question set is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() || self.prompt.is_empty() || self.options.is_empty() {
            return Err(ValidationError::MalformedQuestion);
        }
        if self.difficulty < MIN_DIFFICULTY || self.difficulty > MAX_DIFFICULTY {
            return Err(ValidationError::MalformedQuestion);
        }
        for (i, opt) in self.options.iter().enumerate() {
            if opt.id.is_empty() || opt.text.is_empty() {
                return Err(ValidationError::MalformedQuestion);
            }
            if self.options[..i].iter().any(|prev| prev.id == opt.id) {
                return Err(ValidationError::MalformedQuestion);
            }
        }

        match (&self.answer, self.kind.expects_sequence()) {
            (CorrectAnswer::Single(id), false) => {
                if !self.has_option(id) {
                    return Err(ValidationError::AnswerReferencesUnknownOption);
                }
            }
            (CorrectAnswer::Sequence(ids), true) => {
                if ids.iter().any(|id| !self.has_option(id)) {
                    return Err(ValidationError::AnswerReferencesUnknownOption);
                }
                if ids.len() != self.options.len() {
                    return Err(ValidationError::OrderingAnswerNotAPermutation);
                }
                for (i, id) in ids.iter().enumerate() {
                    if ids[..i].contains(id) {
                        return Err(ValidationError::OrderingAnswerNotAPermutation);
                    }
                }
            }
            // Answer shape does not match the question kind.
            _ => return Err(ValidationError::MalformedQuestion),
        }

        Ok(())
    }
}

/// Content-level validation failures; fatal for the question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MalformedQuestion,
    AnswerReferencesUnknownOption,
    OrderingAnswerNotAPermutation,
}

impl ValidationError {
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::MalformedQuestion => "malformed_question",
            ValidationError::AnswerReferencesUnknownOption => "answer_references_unknown_option",
            ValidationError::OrderingAnswerNotAPermutation => "ordering_answer_not_a_permutation",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MalformedQuestion => "question is missing required fields",
            ValidationError::AnswerReferencesUnknownOption => {
                "correct answer references an option id that does not exist"
            }
            ValidationError::OrderingAnswerNotAPermutation => {
                "ordering answer is not a permutation of the option ids"
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question() -> Question {
        Question {
            id: "q1".to_string(),
            kind: QuestionKind::Choice,
            category: Some("belay".to_string()),
            difficulty: 1,
            prompt: "Which hand is the brake hand?".to_string(),
            scenario: None,
            options: vec![
                QuestionOption::new("a", "The hand on the climber strand"),
                QuestionOption::new("b", "The hand on the brake strand"),
            ],
            answer: CorrectAnswer::Single("b".to_string()),
            explanation: Some("The brake hand never leaves the rope.".to_string()),
            hint: None,
            reference_sources: Vec::new(),
        }
    }

    fn ordering_question() -> Question {
        Question {
            id: "q2".to_string(),
            kind: QuestionKind::Ordering,
            category: None,
            difficulty: 2,
            prompt: "Order the belay stroke".to_string(),
            scenario: None,
            options: vec![
                QuestionOption::new("pull", "Pull"),
                QuestionOption::new("brake", "Brake"),
                QuestionOption::new("under", "Under"),
                QuestionOption::new("slide", "Slide"),
            ],
            answer: CorrectAnswer::Sequence(vec![
                "pull".to_string(),
                "brake".to_string(),
                "under".to_string(),
                "slide".to_string(),
            ]),
            explanation: None,
            hint: Some("PBUS".to_string()),
            reference_sources: Vec::new(),
        }
    }

    #[test]
    fn valid_choice_question_passes() {
        assert!(choice_question().validate().is_ok());
    }

    #[test]
    fn valid_ordering_question_passes() {
        assert!(ordering_question().validate().is_ok());
    }

    #[test]
    fn situation_kind_uses_single_answer() {
        let mut q = choice_question();
        q.kind = QuestionKind::Situation;
        assert!(q.validate().is_ok());
    }

    #[test]
    fn empty_prompt_is_malformed() {
        let mut q = choice_question();
        q.prompt = String::new();
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
    }

    #[test]
    fn empty_options_is_malformed() {
        let mut q = choice_question();
        q.options.clear();
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
    }

    #[test]
    fn duplicate_option_ids_are_malformed() {
        let mut q = choice_question();
        q.options.push(QuestionOption::new("a", "Duplicate id"));
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
    }

    #[test]
    fn difficulty_out_of_range_is_malformed() {
        let mut q = choice_question();
        q.difficulty = 0;
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
        q.difficulty = 4;
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
    }

    #[test]
    fn unknown_answer_id_is_rejected() {
        let mut q = choice_question();
        q.answer = CorrectAnswer::Single("zz".to_string());
        assert_eq!(
            q.validate(),
            Err(ValidationError::AnswerReferencesUnknownOption)
        );
    }

    #[test]
    fn ordering_answer_with_unknown_id_is_rejected() {
        let mut q = ordering_question();
        q.answer = CorrectAnswer::Sequence(vec![
            "pull".to_string(),
            "brake".to_string(),
            "under".to_string(),
            "zz".to_string(),
        ]);
        assert_eq!(
            q.validate(),
            Err(ValidationError::AnswerReferencesUnknownOption)
        );
    }

    #[test]
    fn ordering_answer_missing_an_option_is_not_a_permutation() {
        let mut q = ordering_question();
        q.answer = CorrectAnswer::Sequence(vec![
            "pull".to_string(),
            "brake".to_string(),
            "under".to_string(),
        ]);
        assert_eq!(
            q.validate(),
            Err(ValidationError::OrderingAnswerNotAPermutation)
        );
    }

    #[test]
    fn ordering_answer_with_duplicates_is_not_a_permutation() {
        let mut q = ordering_question();
        q.answer = CorrectAnswer::Sequence(vec![
            "pull".to_string(),
            "pull".to_string(),
            "under".to_string(),
            "slide".to_string(),
        ]);
        assert_eq!(
            q.validate(),
            Err(ValidationError::OrderingAnswerNotAPermutation)
        );
    }

    #[test]
    fn answer_shape_must_match_kind() {
        let mut q = choice_question();
        q.answer = CorrectAnswer::Sequence(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));

        let mut q = ordering_question();
        q.answer = CorrectAnswer::Single("pull".to_string());
        assert_eq!(q.validate(), Err(ValidationError::MalformedQuestion));
    }

    #[test]
    fn option_lookup_finds_by_id() {
        let q = choice_question();
        assert_eq!(
            q.option("b").map(|o| o.text.as_str()),
            Some("The hand on the brake strand")
        );
        assert!(q.option("zz").is_none());
    }
}
