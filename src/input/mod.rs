//! Input layer - keyboard mapping and answer editing
//!
//! `keys` translates crossterm events into UI actions, `editor` holds
//! the in-progress answer those actions drive, and `rng` supplies the
//! deterministic shuffle for ordering questions. Nothing in here
//! touches the session; the host feeds submissions into the core.

pub mod editor;
pub mod keys;
pub mod rng;

pub use editor::AnswerEditor;
pub use keys::{handle_key_event, should_quit, UiAction};
pub use rng::ShuffleRng;
