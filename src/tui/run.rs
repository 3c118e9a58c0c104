//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: a single blocking loop owns the terminal. The calculator
//! has no background work, so the next thing to happen is always a key
//! press, a mouse click, or a resize, and `event::read()` can block on it.

use std::io;
use std::path::Path;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::session::{self, Session};
use crate::types::Token;

use super::keypad;
use super::state::{Action, App};
use super::update::update;
use super::view::{render, screen_areas};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Every character
/// printed on a keypad button maps to that button, so the keyboard can
/// drive everything the mouse can.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Action::Press(Token::Equals)),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::ToggleSpecials),

        // Everything printed on a key: digits, dot, operators, equals, clear
        KeyCode::Char(c) => Token::from_glyph(c).map(Action::Press),

        _ => None,
    }
}

/// Map a mouse event to a semantic Action via keypad hit-testing.
///
/// Only left-button presses count; drags, releases and scrolls are ignored.
pub fn map_mouse(mouse: MouseEvent, keypad_area: Rect, show_specials: bool) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    keypad::button_at(
        keypad_area,
        show_specials,
        Position::new(mouse.column, mouse.row),
    )
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode, mouse reporting included.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// The session at `session_path` is restored before the terminal is
/// touched and written back after a clean exit; `fresh` skips the
/// restore and starts blank.
pub fn run(session_path: &Path, fresh: bool) -> io::Result<()> {
    let session = if fresh {
        Session::default()
    } else {
        session::load_or_default(session_path)
    };

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::from_session(session);
    let mut keypad_area = Rect::default();

    loop {
        // Track where the keypad landed so clicks hit what was drawn.
        terminal.draw(|frame| {
            keypad_area = screen_areas(frame.area()).keypad;
            render(&app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Block on the next input event; nothing happens between inputs.
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
            Event::Mouse(mouse) => map_mouse(mouse, keypad_area, app.show_specials),
            // Resize falls through and redraws on the next pass.
            _ => None,
        };

        if let Some(action) = action {
            update(&mut app, &action);
        }
    }

    restore_terminal()?;
    session::save_session(&app.session(), session_path)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Op;

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn digits_map_to_their_buttons() {
        for d in 0..=9u8 {
            let key = KeyEvent::new(KeyCode::Char((b'0' + d) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::Press(Token::Digit(d))));
        }
    }

    #[test]
    fn operator_keys_map_to_their_buttons() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(map_key(plus), Some(Action::Press(Token::Op(Op::Add))));

        let slash = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(map_key(slash), Some(Action::Press(Token::Op(Op::Div))));
    }

    #[test]
    fn enter_and_equals_both_evaluate() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(Action::Press(Token::Equals)));

        let equals = KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE);
        assert_eq!(map_key(equals), Some(Action::Press(Token::Equals)));
    }

    #[test]
    fn clear_accepts_both_cases() {
        for c in ['c', 'C'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::Press(Token::Clear)));
        }
    }

    #[test]
    fn e_toggles_the_specials_row() {
        for c in ['e', 'E'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::ToggleSpecials));
        }
    }

    #[test]
    fn quit_keys_map_to_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::Quit));
        }
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);

        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(map_key(f1), None);
    }

    #[test]
    fn left_click_on_a_button_presses_it() {
        let area = Rect::new(0, 0, 40, 18);
        let buttons = keypad::layout(area, false);
        let (rect, button) = buttons
            .iter()
            .find(|(_, b)| b.label == "5")
            .copied()
            .unwrap();

        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(map_mouse(mouse, area, false), Some(button.action));
    }

    #[test]
    fn drag_and_release_are_ignored() {
        let area = Rect::new(0, 0, 40, 18);
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            let mouse = MouseEvent {
                kind,
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            };
            assert_eq!(map_mouse(mouse, area, false), None);
        }
    }

    #[test]
    fn click_outside_the_keypad_is_ignored() {
        let area = Rect::new(0, 0, 40, 18);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 200,
            row: 200,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(mouse, area, false), None);
    }
}
