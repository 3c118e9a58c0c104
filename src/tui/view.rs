//! Pure rendering: map App state to ratatui widget trees.
//!
//! One screen: title bar, the result display, the keypad, and a help
//! line. Widget-building functions are pure (state in, widgets out);
//! the only effect is Frame::render_widget() writing to the terminal
//! buffer. The keypad geometry comes from [`super::keypad`], the same
//! source the mouse handler uses.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::types::{ERROR_SENTINEL, Token};

use super::keypad::{self, Button};
use super::state::{Action, App};
use super::theme;

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Screen regions shared by rendering and mouse routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub help: Rect,
}

/// Split the terminal area into the fixed screen regions.
///
/// The event loop routes mouse clicks through the same split, so this
/// must stay in lockstep with [`render`].
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // display
        Constraint::Min(0),    // keypad
        Constraint::Length(1), // help
    ])
    .split(area);

    ScreenAreas {
        title: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        help: chunks[3],
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the calculator to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = screen_areas(frame.area());

    frame.render_widget(render_title(), areas.title);
    render_display(app, frame, areas.display);
    render_keypad(app, frame, areas.keypad);
    frame.render_widget(render_help(), areas.help);
}

/// Title bar showing the app name.
fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("calculadora", theme::STYLE_TITLE)))
}

/// Help line showing the keyboard bindings.
fn render_help() -> Paragraph<'static> {
    let help_text = "[0-9.+-*/=] type  [Enter] equals  [c] clear  [e] extras  [q] quit";
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// DISPLAY
// ============================================================================

/// The bordered result display. Error text switches to the danger style.
fn render_display(app: &App, frame: &mut Frame, area: Rect) {
    let value = app.entry.display();
    let style = if value == ERROR_SENTINEL {
        theme::STYLE_DISPLAY_ERROR
    } else {
        theme::STYLE_DISPLAY
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(value.to_string(), style)))
        .block(Block::bordered());
    frame.render_widget(paragraph, area);
}

// ============================================================================
// KEYPAD
// ============================================================================

/// Draw every visible button as a colored bordered block.
fn render_keypad(app: &App, frame: &mut Frame, area: Rect) {
    for (rect, button) in keypad::layout(area, app.show_specials) {
        // Pad the label down to the vertical middle of the button.
        let top_pad = rect.height.saturating_sub(3) / 2;
        let block = Block::bordered()
            .style(button_style(&button))
            .padding(Padding::top(top_pad));
        let label = Paragraph::new(Line::from(button.label).centered()).block(block);
        frame.render_widget(label, rect);
    }
}

/// Style for one button, keyed on what pressing it does.
fn button_style(button: &Button) -> Style {
    match button.action {
        Action::Press(Token::Digit(_)) => theme::STYLE_KEY_DIGIT,
        Action::Press(Token::Op(_) | Token::Equals) => theme::STYLE_KEY_OPERATOR,
        Action::Press(Token::Clear) => theme::STYLE_KEY_CLEAR,
        Action::Press(Token::Sqrt | Token::Percent) => theme::STYLE_KEY_SPECIAL,
        Action::Press(Token::Dot) => theme::STYLE_KEY_NEUTRAL,
        Action::ToggleSpecials | Action::Quit => theme::STYLE_KEY_NEUTRAL,
    }
}

// ============================================================================
// TESTS
// ============================================================================
