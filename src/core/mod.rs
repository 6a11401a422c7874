//! Core module - pure game logic with no external dependencies
//!
//! This module contains the question model, the scoring policy, and the
//! session state machine. It has zero dependencies on UI, networking,
//! or I/O: hosts call operations and read accessors, nothing in here
//! renders, sleeps, or talks to a clock.

pub mod question;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use question::{CorrectAnswer, Question, QuestionOption, SubmittedAnswer, ValidationError};
pub use scoring::{evaluate, ScoreOutcome};
pub use session::{
    AnswerOutcome, AnswerRecord, GameSession, GameStats, SessionError, StartError,
};
