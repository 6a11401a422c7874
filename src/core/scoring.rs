//! Scoring module - per-answer score, combo, and life effects
//!
//! Behavior notes:
//! - Correctness compares option ids only, never display positions.
//! - Ordering answers are all-or-nothing; a single misplaced step
//!   scores the same as no answer at all.
//! - The combo bonus grows per consecutive correct answer and plateaus
//!   at `combo_cap` steps.
//! - A wrong answer costs exactly one life, regardless of difficulty.

use crate::core::question::{CorrectAnswer, Question, SubmittedAnswer};
use crate::types::ScoringRules;

/// Outcome of scoring one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreOutcome {
    pub is_correct: bool,
    /// Base points for a correct answer (0 when incorrect).
    pub base_points: u32,
    /// Streak bonus added on top of `base_points`.
    pub combo_bonus: u32,
    /// Total score change; never negative.
    pub score_delta: u32,
    /// Streak value after this answer.
    pub new_combo: u32,
    /// 0 or 1.
    pub lives_lost: u32,
}

/// Check a submission against the canonical answer.
///
/// A blank submission, or one whose shape does not match the question
/// kind, is simply incorrect rather than an error.
pub fn answer_matches(question: &Question, submitted: &SubmittedAnswer) -> bool {
    match (&question.answer, submitted) {
        (CorrectAnswer::Single(want), SubmittedAnswer::Single(got)) => want == got,
        (CorrectAnswer::Sequence(want), SubmittedAnswer::Sequence(got)) => want == got,
        _ => false,
    }
}

/// Streak bonus for a correct answer at the given streak value
pub fn combo_bonus(new_combo: u32, rules: &ScoringRules) -> u32 {
    new_combo
        .min(rules.combo_cap)
        .saturating_mul(rules.combo_bonus_per_step)
}

/// Score one submitted answer. Pure: no session state is read or
/// written, the caller applies the returned deltas.
pub fn evaluate(
    question: &Question,
    submitted: &SubmittedAnswer,
    combo_before: u32,
    rules: &ScoringRules,
) -> ScoreOutcome {
    if !answer_matches(question, submitted) {
        return ScoreOutcome {
            is_correct: false,
            base_points: 0,
            combo_bonus: 0,
            score_delta: 0,
            new_combo: 0,
            lives_lost: 1,
        };
    }

    let new_combo = combo_before.saturating_add(1);
    let bonus = combo_bonus(new_combo, rules);
    ScoreOutcome {
        is_correct: true,
        base_points: rules.base_points,
        combo_bonus: bonus,
        score_delta: rules.base_points.saturating_add(bonus),
        new_combo,
        lives_lost: 0,
    }
}
