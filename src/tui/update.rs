//! Pure state transitions: (App, Action) → next App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Button presses feed the accumulator; the two UI flags are handled
//! here directly.

use crate::dispatch::dispatch;
use crate::types::Token;

use super::state::{Action, App};

/// Pure state transition function.
///
/// Mutates the model in place; the next draw picks up the new state.
pub fn update(app: &mut App, action: &Action) {
    match action {
        Action::Press(token) => press(app, token),
        Action::ToggleSpecials => app.show_specials = !app.show_specials,
        Action::Quit => app.should_quit = true,
    }
}

/// Route one keypad press through the accumulator.
///
/// The special-function keys exist only while their row is shown; a
/// keyboard `%` with the row hidden must not press an invisible button.
fn press(app: &mut App, token: &Token) {
    if matches!(token, Token::Sqrt | Token::Percent) && !app.show_specials {
        return;
    }
    let entry = std::mem::take(&mut app.entry);
    app.entry = dispatch(entry, token);
}

// ============================================================================
// TESTS
// ============================================================================
