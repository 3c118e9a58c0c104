//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! and the rendering layer both program against them.
//!
//! Design principle: the calculation itself lives in [`Entry`], owned by
//! the domain layer. App adds only UI concerns on top of it: the
//! specials-row toggle and the quit flag.

use crate::session::Session;
use crate::types::{Entry, Token};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// The effects layer reads this to know what to render; the update
/// function is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Current calculation, advanced one keypad token at a time.
    pub entry: Entry,

    /// Whether the extra keypad row (√ and %) is visible.
    pub show_specials: bool,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
///
/// The effects layer maps key presses and clicks to Actions.
/// The transition function decides what each Action does to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a keypad button.
    Press(Token),
    /// Show or hide the extra keypad row.
    ToggleSpecials,
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh calculator: idle entry, specials row hidden.
    pub fn new() -> Self {
        App {
            entry: Entry::Idle,
            show_specials: false,
            should_quit: false,
        }
    }

    /// Restore a calculator from a saved session.
    pub fn from_session(session: Session) -> Self {
        App {
            entry: session.entry,
            show_specials: session.show_specials,
            should_quit: false,
        }
    }

    /// Snapshot the restorable parts of the model.
    pub fn session(&self) -> Session {
        Session {
            entry: self.entry.clone(),
            show_specials: self.show_specials,
            ..Session::default()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Op;

    #[test]
    fn new_app_starts_idle_with_specials_hidden() {
        let app = App::new();
        assert_eq!(app.entry, Entry::Idle);
        assert!(!app.show_specials);
        assert!(!app.should_quit);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(App::default(), App::new());
    }

    #[test]
    fn from_session_restores_entry_and_toggle() {
        let session = Session {
            entry: Entry::Chosen {
                first: "8".into(),
                op: Op::Mul,
            },
            show_specials: true,
            ..Session::default()
        };

        let app = App::from_session(session);

        assert_eq!(app.entry.display(), "8");
        assert_eq!(app.entry.operator(), Some(Op::Mul));
        assert!(app.show_specials);
        assert!(!app.should_quit);
    }

    #[test]
    fn session_snapshot_round_trips() {
        let mut app = App::new();
        app.entry = Entry::First {
            first: "3.5".into(),
        };
        app.show_specials = true;

        let restored = App::from_session(app.session());

        assert_eq!(restored, app);
    }

    #[test]
    fn action_equality_for_matching() {
        assert_eq!(Action::Press(Token::Digit(5)), Action::Press(Token::Digit(5)));
        assert_ne!(Action::Press(Token::Digit(5)), Action::Press(Token::Digit(6)));
        assert_ne!(Action::ToggleSpecials, Action::Quit);
    }
}
