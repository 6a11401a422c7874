//! Answer editor - the in-progress answer for the current question
//!
//! Holds everything the player is doing before Enter: the cursor, the
//! display arrangement of ordering steps (shuffled at build time so the
//! authored order gives nothing away), the grab state for dragging a
//! step, and the hint flag. Build a fresh editor for every question;
//! `submission` turns the editing state into a `SubmittedAnswer`.
//!
//! The editor is pure presentation state. It never reads or writes the
//! session, and the core only ever sees the extracted submission.

use crate::core::question::{Question, SubmittedAnswer};
use crate::input::keys::UiAction;
use crate::input::rng::ShuffleRng;
use crate::types::QuestionKind;

#[derive(Debug, Clone)]
pub struct AnswerEditor {
    kind: QuestionKind,
    /// Highlighted display row
    cursor: usize,
    /// Display row -> authored option index
    rows: Vec<usize>,
    /// Ordering only: the cursor row is picked up and moves with the cursor
    grabbed: bool,
    hint_shown: bool,
}

impl AnswerEditor {
    /// Build the editing state for one question. Ordering questions get
    /// a shuffled display arrangement; other kinds keep authored order.
    pub fn for_question(question: &Question, rng: &mut ShuffleRng) -> Self {
        let rows = if question.kind == QuestionKind::Ordering {
            rng.shuffled_indices(question.options.len())
        } else {
            (0..question.options.len()).collect()
        };
        Self {
            kind: question.kind,
            cursor: 0,
            rows,
            grabbed: false,
            hint_shown: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    /// Display rows as authored option indices, top to bottom
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn option_count(&self) -> usize {
        self.rows.len()
    }

    /// Move the cursor up one row; a grabbed step moves with it
    pub fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if self.grabbed {
            self.rows.swap(self.cursor, self.cursor - 1);
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor down one row; a grabbed step moves with it
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 >= self.rows.len() {
            return false;
        }
        if self.grabbed {
            self.rows.swap(self.cursor, self.cursor + 1);
        }
        self.cursor += 1;
        true
    }

    /// Jump straight to a row (digit keys). Ignored while grabbing.
    pub fn jump(&mut self, row: usize) -> bool {
        if self.grabbed || row >= self.rows.len() {
            return false;
        }
        self.cursor = row;
        true
    }

    /// Pick up or drop the highlighted step (ordering questions only)
    pub fn toggle_grab(&mut self) -> bool {
        if self.kind != QuestionKind::Ordering {
            return false;
        }
        self.grabbed = !self.grabbed;
        true
    }

    pub fn toggle_hint(&mut self) -> bool {
        self.hint_shown = !self.hint_shown;
        true
    }

    /// Route an editing action. Host-level actions (`Confirm`, `Pause`,
    /// `Restart`) are not editing and return false untouched.
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::MoveUp => self.move_up(),
            UiAction::MoveDown => self.move_down(),
            UiAction::Jump(row) => self.jump(row),
            UiAction::Grab => self.toggle_grab(),
            UiAction::Hint => self.toggle_hint(),
            UiAction::Confirm | UiAction::Pause | UiAction::Restart => false,
        }
    }

    /// Turn the editing state into a submission for this question
    pub fn submission(&self, question: &Question) -> SubmittedAnswer {
        match self.kind {
            QuestionKind::Ordering => SubmittedAnswer::Sequence(
                self.rows
                    .iter()
                    .filter_map(|&i| question.options.get(i).map(|o| o.id.clone()))
                    .collect(),
            ),
            QuestionKind::Choice | QuestionKind::Situation => {
                match self
                    .rows
                    .get(self.cursor)
                    .and_then(|&i| question.options.get(i))
                {
                    Some(option) => SubmittedAnswer::Single(option.id.clone()),
                    None => SubmittedAnswer::Blank,
                }
            }
        }
    }
}
