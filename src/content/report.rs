//! Report module - JSON projection of a session for export
//!
//! One-way: the report reads a live session and serializes, nothing is
//! ever restored from it.

use serde::Serialize;

use crate::core::question::SubmittedAnswer;
use crate::core::session::{AnswerRecord, GameSession, GameStats};

/// Full session report written by `--report`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub pack: String,
    pub mode: &'static str,
    pub completed: bool,
    pub question_count: usize,
    pub stats: StatsReport,
    pub answers: Vec<AnswerReport>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub score: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub max_combo: u32,
    pub time_spent_secs: u32,
    pub total_answered: u32,
}

impl From<GameStats> for StatsReport {
    fn from(value: GameStats) -> Self {
        Self {
            score: value.score,
            correct_count: value.correct_count,
            wrong_count: value.wrong_count,
            max_combo: value.max_combo,
            time_spent_secs: value.time_spent_secs,
            total_answered: value.total_answered,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReport {
    pub question_id: String,
    pub prompt: String,
    pub is_correct: bool,
    pub score_delta: u32,
    pub answered_at_secs: u32,
    /// `null` for a timeout-forced blank answer
    pub submitted: Option<SubmittedDoc>,
}

/// Mirrors the pack document answer shape: string or array
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SubmittedDoc {
    One(String),
    Seq(Vec<String>),
}

fn submitted_doc(submitted: &SubmittedAnswer) -> Option<SubmittedDoc> {
    match submitted {
        SubmittedAnswer::Single(id) => Some(SubmittedDoc::One(id.clone())),
        SubmittedAnswer::Sequence(ids) => Some(SubmittedDoc::Seq(ids.clone())),
        SubmittedAnswer::Blank => None,
    }
}

impl SessionReport {
    /// Project a session. Works mid-run as well as after completion.
    pub fn from_session(pack_title: &str, session: &GameSession) -> Self {
        let answers = session
            .results()
            .iter()
            .map(|record| answer_report(session, record))
            .collect();
        Self {
            pack: pack_title.to_string(),
            mode: session.mode().as_str(),
            completed: session.is_complete(),
            question_count: session.question_count(),
            stats: session.stats().into(),
            answers,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn answer_report(session: &GameSession, record: &AnswerRecord) -> AnswerReport {
    let prompt = session
        .question_by_id(&record.question_id)
        .map(|q| q.prompt.clone())
        .unwrap_or_default();
    AnswerReport {
        question_id: record.question_id.clone(),
        prompt,
        is_correct: record.is_correct,
        score_delta: record.score_delta,
        answered_at_secs: record.answered_at_secs,
        submitted: submitted_doc(&record.submitted),
    }
}
