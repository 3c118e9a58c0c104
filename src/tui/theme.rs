//! TUI color semantics and style constants.
//!
//! Centralized theme definitions for the keypad and display.
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Dark gray keys: digits
//! - Orange keys: operators and equals
//! - Red key: clear
//! - Gray keys: the decimal point and the specials toggle
//! - Blue keys: the square-root and percent row
//! - Red display text: the error sentinel

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// KEY STYLES
// ============================================================================

/// Digit keys 0 through 9.
pub const STYLE_KEY_DIGIT: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

/// Operator keys and equals.
pub const STYLE_KEY_OPERATOR: Style = Style::new().fg(Color::Black).bg(Color::Rgb(255, 165, 0));

/// The clear key.
pub const STYLE_KEY_CLEAR: Style = Style::new().fg(Color::White).bg(Color::Red);

/// The decimal point and the specials toggle.
pub const STYLE_KEY_NEUTRAL: Style = Style::new().fg(Color::Black).bg(Color::Gray);

/// The square-root and percent keys.
pub const STYLE_KEY_SPECIAL: Style = Style::new().fg(Color::White).bg(Color::Blue);

// ============================================================================
// DISPLAY AND CHROME
// ============================================================================

/// The result display.
pub const STYLE_DISPLAY: Style = Style::new().add_modifier(Modifier::BOLD);

/// The result display while it shows the error sentinel.
pub const STYLE_DISPLAY_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
