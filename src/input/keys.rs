//! Keyboard handling for quiz controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    MoveUp,
    MoveDown,
    /// Jump the cursor straight to an option row (digit keys, 0-based)
    Jump(usize),
    /// Pick up or drop the highlighted ordering step
    Grab,
    /// Submit the current answer, or advance once answered
    Confirm,
    Hint,
    Pause,
    Restart,
}

/// Map keyboard input to quiz actions
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiAction::MoveDown),

        KeyCode::Char(' ') => Some(UiAction::Grab),
        KeyCode::Enter => Some(UiAction::Confirm),

        KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::Hint),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(UiAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        // 1-9 jump to that option row
        KeyCode::Char(c @ '1'..='9') => {
            Some(UiAction::Jump(c as usize - '1' as usize))
        }

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
