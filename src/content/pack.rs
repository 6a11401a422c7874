//! Pack module - JSON question-pack documents
//!
//! Documents use the camelCase field names of the upstream content
//! (`categoryId`, `correctAnswer`, `referenceSources`), with
//! `correctAnswer` accepting either a single option id or an id array.
//! Mapping into core questions validates every member; a bad member
//! fails the whole pack with its index, so broken content never reaches
//! a session.

use serde::{Deserialize, Serialize};

use crate::core::question::{CorrectAnswer, Question, QuestionOption, ValidationError};
use crate::types::QuestionKind;

/// A question pack document as found on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackDoc {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub questions: Vec<QuestionDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDoc {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub question: String,
    pub options: Vec<OptionDoc>,
    pub correct_answer: AnswerDoc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_sources: Vec<String>,
}

fn default_difficulty() -> u8 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDoc {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// `correctAnswer` is a string for choice/situation questions and an
/// array for ordering questions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerDoc {
    One(String),
    Seq(Vec<String>),
}

/// A parsed, validated pack ready to hand to a session
#[derive(Debug, Clone)]
pub struct LoadedPack {
    pub title: String,
    pub category: Option<String>,
    pub questions: Vec<Question>,
}

/// Why a pack could not be loaded
#[derive(Debug)]
pub enum PackError {
    Parse(serde_json::Error),
    Empty,
    UnknownKind { index: usize, kind: String },
    InvalidQuestion { index: usize, reason: ValidationError },
}

impl std::fmt::Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::Parse(e) => write!(f, "could not parse pack JSON: {e}"),
            PackError::Empty => f.write_str("pack contains no questions"),
            PackError::UnknownKind { index, kind } => {
                write!(f, "question at index {index} has unknown kind {kind:?}")
            }
            PackError::InvalidQuestion { index, reason } => {
                write!(f, "question at index {index} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse a pack document from JSON text
pub fn parse_pack(json: &str) -> Result<PackDoc, PackError> {
    serde_json::from_str(json).map_err(PackError::Parse)
}

/// Parse, map, and validate a pack in one step
pub fn load_pack(json: &str) -> Result<LoadedPack, PackError> {
    parse_pack(json)?.into_loaded()
}

impl PackDoc {
    /// Map the document into validated core questions
    pub fn into_loaded(self) -> Result<LoadedPack, PackError> {
        if self.questions.is_empty() {
            return Err(PackError::Empty);
        }

        let pack_category = self.category.clone();
        let mut questions = Vec::with_capacity(self.questions.len());
        for (index, doc) in self.questions.into_iter().enumerate() {
            let Some(kind) = QuestionKind::from_str(&doc.kind) else {
                return Err(PackError::UnknownKind {
                    index,
                    kind: doc.kind,
                });
            };

            let question = Question {
                id: doc.id,
                kind,
                category: doc.category_id.or_else(|| pack_category.clone()),
                difficulty: doc.difficulty,
                prompt: doc.question,
                scenario: doc.scenario,
                options: doc
                    .options
                    .into_iter()
                    .map(|o| QuestionOption {
                        id: o.id,
                        text: o.text,
                        image_ref: o.image,
                    })
                    .collect(),
                answer: match doc.correct_answer {
                    AnswerDoc::One(id) => CorrectAnswer::Single(id),
                    AnswerDoc::Seq(ids) => CorrectAnswer::Sequence(ids),
                },
                explanation: doc.explanation,
                hint: doc.hint,
                reference_sources: doc.reference_sources,
            };

            if let Err(reason) = question.validate() {
                return Err(PackError::InvalidQuestion { index, reason });
            }
            questions.push(question);
        }

        Ok(LoadedPack {
            title: self.title,
            category: pack_category,
            questions,
        })
    }
}
