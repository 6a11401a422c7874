//! Terminal rendering layer.
//!
//! Renders quiz screens into a simple framebuffer of styled character
//! cells, flushed to the terminal by a diffing renderer. No widget
//! toolkit; the view composes screens cell by cell, which keeps the
//! whole pipeline pure and unit-testable up to the final flush.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only what changed between frames
//! - Make every screen assertable in tests as plain text

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{QuizView, Viewport};
pub use renderer::TerminalRenderer;
