//! Session state machine - one play-through from start to completion
//!
//! This module owns all mutable run state: the question sequence, the
//! cursor, score, lives, combo, countdown, and the answer log. It is the
//! only place that mutates any of them; scoring math lives in
//! `core::scoring` and the view layers only read.
//!
//! Lifecycle: not started -> active -> complete. `start` over an active
//! session discards it, `reset` returns to not started. Rejected calls
//! leave the session unchanged.

use crate::core::question::{Question, SubmittedAnswer, ValidationError};
use crate::core::scoring;
use crate::types::{GameConfig, GameMode};

/// One logged answer; at most one per question per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: String,
    pub submitted: SubmittedAnswer,
    pub is_correct: bool,
    pub score_delta: u32,
    /// Play seconds accumulated when the answer landed
    pub answered_at_secs: u32,
}

/// What one `submit_answer` (or timeout) did, returned so the host can
/// drive feedback without re-reading session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub score_delta: u32,
    /// Streak portion of `score_delta`
    pub combo_bonus: u32,
    /// Streak value after this answer
    pub combo: u32,
    /// Lives remaining after this answer
    pub lives: u32,
    /// True when the answer was forced by an expired countdown
    pub timed_out: bool,
}

/// Summary projection, valid in any phase (partial while mid-run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    pub score: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub max_combo: u32,
    pub time_spent_secs: u32,
    pub total_answered: u32,
}

/// Why `start` refused a question set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    EmptyQuestionSet,
    InvalidQuestionSet {
        index: usize,
        reason: ValidationError,
    },
}

impl StartError {
    pub fn code(&self) -> &'static str {
        match self {
            StartError::EmptyQuestionSet => "empty_question_set",
            StartError::InvalidQuestionSet { .. } => "invalid_question_set",
        }
    }
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::EmptyQuestionSet => f.write_str("question set is empty"),
            StartError::InvalidQuestionSet { index, reason } => {
                write!(f, "question at index {index} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for StartError {}

/// Caller-sequencing mistakes; the rejected call changes nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    NotStarted,
    AlreadyAnswered,
    NotYetAnswered,
    SessionComplete,
}

impl SessionError {
    pub fn code(self) -> &'static str {
        match self {
            SessionError::NotStarted => "not_started",
            SessionError::AlreadyAnswered => "already_answered",
            SessionError::NotYetAnswered => "not_yet_answered",
            SessionError::SessionComplete => "session_complete",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SessionError::NotStarted => "session has not been started",
            SessionError::AlreadyAnswered => "current question already has a recorded answer",
            SessionError::NotYetAnswered => "current question has no recorded answer yet",
            SessionError::SessionComplete => "session is already complete",
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SessionError {}

/// Complete state of one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    config: GameConfig,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    lives: u32,
    combo: u32,
    max_combo: u32,
    time_remaining: Option<u32>,
    /// Play seconds observed via `tick` (frozen while paused or answered)
    elapsed_secs: u32,
    is_answered: bool,
    is_paused: bool,
    started: bool,
    complete: bool,
    results: Vec<AnswerRecord>,
}

impl GameSession {
    /// Create an idle session; call `start` to begin a run
    pub fn new() -> Self {
        Self {
            mode: GameMode::Learn,
            config: GameConfig::learn(),
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            lives: 0,
            combo: 0,
            max_combo: 0,
            time_remaining: None,
            elapsed_secs: 0,
            is_answered: false,
            is_paused: false,
            started: false,
            complete: false,
            results: Vec::new(),
        }
    }

    /// Begin a run over the given questions. The set is validated
    /// before any state changes, so on error the previous run (if any)
    /// is untouched. Starting over an active run discards it.
    pub fn start(
        &mut self,
        mode: GameMode,
        questions: Vec<Question>,
        config: GameConfig,
    ) -> Result<(), StartError> {
        if questions.is_empty() {
            return Err(StartError::EmptyQuestionSet);
        }
        for (index, question) in questions.iter().enumerate() {
            if let Err(reason) = question.validate() {
                return Err(StartError::InvalidQuestionSet { index, reason });
            }
        }

        self.mode = mode;
        self.config = config;
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.lives = config.lives;
        self.combo = 0;
        self.max_combo = 0;
        self.time_remaining = config.timer.initial_secs();
        self.elapsed_secs = 0;
        self.is_answered = false;
        self.is_paused = false;
        self.started = true;
        self.complete = config.lives == 0;
        self.results = Vec::new();
        Ok(())
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn results(&self) -> &[AnswerRecord] {
        &self.results
    }

    /// The question under the cursor while a run is active
    pub fn current_question(&self) -> Option<&Question> {
        if !self.started || self.complete {
            return None;
        }
        self.questions.get(self.current_index)
    }

    /// Look up a question by id (for summary displays)
    pub fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Whether the host should show the explanation panel now
    pub fn show_explanation(&self) -> bool {
        self.is_answered && self.mode == GameMode::Learn
    }

    fn guard_active(&self) -> Result<(), SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        if self.complete {
            return Err(SessionError::SessionComplete);
        }
        Ok(())
    }

    /// Record an answer for the current question and apply its effects.
    ///
    /// Score and lives are floored at zero, `max_combo` tracks the
    /// streak high-water mark, and the record is appended to the log.
    /// When the last life is lost the session completes on the spot,
    /// with this answer still recorded.
    pub fn submit_answer(
        &mut self,
        answer: SubmittedAnswer,
    ) -> Result<AnswerOutcome, SessionError> {
        self.guard_active()?;
        if self.is_answered {
            return Err(SessionError::AlreadyAnswered);
        }
        Ok(self.record_answer(answer, false))
    }

    fn record_answer(&mut self, submitted: SubmittedAnswer, timed_out: bool) -> AnswerOutcome {
        // Guarded callers guarantee the cursor points at a question.
        let outcome = {
            let question = &self.questions[self.current_index];
            scoring::evaluate(question, &submitted, self.combo, &self.config.scoring)
        };

        self.score = self.score.saturating_add(outcome.score_delta);
        self.lives = self.lives.saturating_sub(outcome.lives_lost);
        self.combo = outcome.new_combo;
        self.max_combo = self.max_combo.max(self.combo);
        self.results.push(AnswerRecord {
            question_id: self.questions[self.current_index].id.clone(),
            submitted,
            is_correct: outcome.is_correct,
            score_delta: outcome.score_delta,
            answered_at_secs: self.elapsed_secs,
        });
        self.is_answered = true;

        if self.lives == 0 {
            self.complete = true;
        }

        AnswerOutcome {
            is_correct: outcome.is_correct,
            score_delta: outcome.score_delta,
            combo_bonus: outcome.combo_bonus,
            combo: self.combo,
            lives: self.lives,
            timed_out,
        }
    }

    /// Advance past an answered question. Completes the session once
    /// the cursor passes the last question; reloads the countdown under
    /// a per-question timer rule.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.guard_active()?;
        if !self.is_answered {
            return Err(SessionError::NotYetAnswered);
        }

        self.current_index += 1;
        self.is_answered = false;
        if self.current_index >= self.questions.len() {
            self.complete = true;
        } else if let Some(secs) = self.config.timer.reload_secs() {
            self.time_remaining = Some(secs);
        }
        Ok(())
    }

    /// Advance the play clock by `seconds`. Ignored unless the run is
    /// active with the current question still open and not paused.
    ///
    /// With a countdown present, reaching zero force-submits a blank
    /// answer through the normal scoring path and returns its outcome.
    /// A countdown already at zero (a spent global timer) forces on the
    /// next tick, failing each remaining question as it comes up.
    pub fn tick(&mut self, seconds: u32) -> Option<AnswerOutcome> {
        if seconds == 0 {
            return None;
        }
        if !self.started || self.complete || self.is_paused || self.is_answered {
            return None;
        }

        self.elapsed_secs = self.elapsed_secs.saturating_add(seconds);

        let remaining = self.time_remaining?;
        let remaining = remaining.saturating_sub(seconds);
        self.time_remaining = Some(remaining);
        if remaining == 0 {
            return Some(self.record_answer(SubmittedAnswer::Blank, true));
        }
        None
    }

    /// Flip pause while active. Paused sessions ignore `tick`.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.complete {
            return false;
        }
        self.is_paused = !self.is_paused;
        true
    }

    /// Discard the run and return to the idle state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Summary numbers for mid-run displays and the final screen
    pub fn stats(&self) -> GameStats {
        let correct_count = self.results.iter().filter(|r| r.is_correct).count() as u32;
        GameStats {
            score: self.score,
            correct_count,
            wrong_count: self.results.len() as u32 - correct_count,
            max_combo: self.max_combo,
            time_spent_secs: self.elapsed_secs,
            total_answered: self.results.len() as u32,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
