//! Rope-system practice quiz - pure game core with a terminal front end
//!
//! The crate is split so that everything that decides anything lives in
//! [`core`], which has zero I/O and runs the same everywhere:
//!
//! - [`core`]: questions, answer grading, and the session state machine
//!   (score, combo, lives, timers, results)
//! - [`content`]: question packs - JSON loading, the built-in pack, and
//!   the end-of-run session report
//! - [`input`]: keyboard mapping and the in-progress answer editor
//! - [`term`]: framebuffer rendering of the quiz screens
//! - [`types`]: shared enums, config, and tuning constants
//!
//! # Example
//!
//! ```
//! use tui_ropequiz::content::builtin_questions;
//! use tui_ropequiz::core::GameSession;
//! use tui_ropequiz::types::{GameConfig, GameMode};
//!
//! let mut session = GameSession::new();
//! session
//!     .start(GameMode::Learn, builtin_questions(), GameConfig::learn())
//!     .unwrap();
//!
//! assert_eq!(session.score(), 0);
//! assert!(session.current_question().is_some());
//! ```

pub mod content;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
