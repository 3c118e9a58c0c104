//! Keypad geometry: button tables and hit-testing.
//!
//! The keypad is data, not widgets: constant rows of labeled buttons that
//! the view renders and the mouse handler tests clicks against. Both go
//! through [`layout`], so what you see is exactly what you can click.
//!
//! Row order, top to bottom: the control row (clear, specials toggle),
//! the four key rows, and the specials row when toggled on.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::types::{Op, Token};

use super::state::Action;

// ============================================================================
// BUTTON TABLES
// ============================================================================

/// One keypad button: its label, the action it emits, and its relative
/// width within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub weight: u16,
}

const fn key(label: &'static str, token: Token) -> Button {
    Button {
        label,
        action: Action::Press(token),
        weight: 1,
    }
}

const fn wide_key(label: &'static str, token: Token) -> Button {
    Button {
        label,
        action: Action::Press(token),
        weight: 2,
    }
}

/// Top row: clear and the specials toggle.
pub static CONTROL_ROW: [Button; 2] = [
    key("C", Token::Clear),
    Button {
        label: "E",
        action: Action::ToggleSpecials,
        weight: 1,
    },
];

/// The main grid. "0" and "=" span two columns.
pub static KEY_ROWS: [[Button; 4]; 4] = [
    [
        key("7", Token::Digit(7)),
        key("8", Token::Digit(8)),
        key("9", Token::Digit(9)),
        key("/", Token::Op(Op::Div)),
    ],
    [
        key("4", Token::Digit(4)),
        key("5", Token::Digit(5)),
        key("6", Token::Digit(6)),
        key("*", Token::Op(Op::Mul)),
    ],
    [
        key("1", Token::Digit(1)),
        key("2", Token::Digit(2)),
        key("3", Token::Digit(3)),
        key("-", Token::Op(Op::Sub)),
    ],
    [
        wide_key("0", Token::Digit(0)),
        key(".", Token::Dot),
        wide_key("=", Token::Equals),
        key("+", Token::Op(Op::Add)),
    ],
];

/// The toggled extra row.
pub static SPECIALS_ROW: [Button; 2] = [key("√", Token::Sqrt), key("%", Token::Percent)];

// ============================================================================
// GEOMETRY
// ============================================================================

/// Compute the on-screen rectangle of every visible button.
///
/// Rows share the height evenly; widths within a row follow each
/// button's weight.
pub fn layout(area: Rect, show_specials: bool) -> Vec<(Rect, Button)> {
    let rows = visible_rows(show_specials);
    let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Fill(1))).split(area);

    let mut buttons = Vec::new();
    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells =
            Layout::horizontal(row.iter().map(|b| Constraint::Fill(b.weight))).split(*row_area);
        for (button, cell) in row.iter().zip(cells.iter()) {
            buttons.push((*cell, *button));
        }
    }
    buttons
}

/// Find the button under a terminal position, if any.
pub fn button_at(area: Rect, show_specials: bool, position: Position) -> Option<Action> {
    layout(area, show_specials)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, button)| button.action)
}

/// The rows drawn for the current toggle state, top to bottom.
fn visible_rows(show_specials: bool) -> Vec<&'static [Button]> {
    let mut rows: Vec<&'static [Button]> = vec![&CONTROL_ROW];
    for row in &KEY_ROWS {
        rows.push(row);
    }
    if show_specials {
        rows.push(&SPECIALS_ROW);
    }
    rows
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 18,
    };

    fn find_button(buttons: &[(Rect, Button)], label: &str) -> Rect {
        buttons
            .iter()
            .find(|(_, b)| b.label == label)
            .map(|(rect, _)| *rect)
            .unwrap_or_else(|| panic!("no button labeled {label:?}"))
    }

    #[test]
    fn base_keypad_has_eighteen_buttons() {
        assert_eq!(layout(AREA, false).len(), 18);
    }

    #[test]
    fn specials_row_adds_two_buttons() {
        assert_eq!(layout(AREA, true).len(), 20);
    }

    #[test]
    fn specials_row_sits_below_the_digit_grid() {
        let buttons = layout(AREA, true);
        let sqrt = find_button(&buttons, "√");
        let zero = find_button(&buttons, "0");
        assert!(sqrt.y > zero.y);
    }

    #[test]
    fn zero_and_equals_are_double_width() {
        let buttons = layout(AREA, false);
        let one = find_button(&buttons, "1");
        assert!(find_button(&buttons, "0").width > one.width);
        assert!(find_button(&buttons, "=").width > one.width);
    }

    #[test]
    fn every_button_center_hits_its_own_action() {
        for (rect, button) in layout(AREA, false) {
            let center = Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(
                button_at(AREA, false, center),
                Some(button.action),
                "button {}",
                button.label
            );
        }
    }

    #[test]
    fn click_outside_the_keypad_finds_nothing() {
        assert_eq!(button_at(AREA, false, Position::new(50, 50)), None);
    }

    #[test]
    fn hidden_specials_are_not_clickable() {
        let buttons = layout(AREA, true);
        let sqrt = find_button(&buttons, "√");
        let center = Position::new(sqrt.x + sqrt.width / 2, sqrt.y + sqrt.height / 2);

        assert_eq!(
            button_at(AREA, true, center),
            Some(Action::Press(Token::Sqrt))
        );
        // With the row hidden the same spot belongs to another key.
        assert_ne!(
            button_at(AREA, false, center),
            Some(Action::Press(Token::Sqrt))
        );
    }
}
