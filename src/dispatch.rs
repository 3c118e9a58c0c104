//! The input accumulator: a pure state machine over keypad tokens.
//!
//! One operation, [`dispatch`], total over every (state, token) pair and
//! fully testable without a terminal. Tokens are handled in priority order:
//! clear, operator, equals, then everything else appends its character to
//! the active operand. Tokens that don't apply in the current phase are
//! no-ops, never errors.

use crate::eval::evaluate;
use crate::types::{Entry, Op, Token};

/// Advance the calculation state by one keypad token.
///
/// Consumes the current state and returns the next; the caller owns the
/// state and threads it through (`std::mem::take` pairs with
/// `Entry::default()` at mutable call sites).
pub fn dispatch(entry: Entry, token: &Token) -> Entry {
    match token {
        Token::Clear => Entry::Idle,
        Token::Op(op) => choose_operator(entry, *op),
        Token::Equals => apply_equals(entry),
        // Digits, the decimal point, and the inert special-function keys
        // all land in the active operand as their literal character.
        literal => append(entry, literal.glyph()),
    }
}

// ============================================================================
// PER-TOKEN HANDLERS
// ============================================================================

/// Operator keys require a first operand; with none they are dropped.
/// Re-pressing an operator replaces the pending one, and does so even
/// mid-second-operand, where the typed text is kept.
fn choose_operator(entry: Entry, op: Op) -> Entry {
    match entry {
        Entry::Idle => Entry::Idle,
        Entry::First { first } => Entry::Chosen { first, op },
        Entry::Chosen { first, .. } => Entry::Chosen { first, op },
        Entry::Second { first, second, .. } => Entry::Second { first, op, second },
    }
}

/// `=` evaluates only when both operands and the operator are present,
/// which is exactly the `Second` phase. The result — the error sentinel
/// included — becomes the new first operand; operator and second operand
/// reset, so a repeated `=` finds nothing to do.
fn apply_equals(entry: Entry) -> Entry {
    match entry {
        Entry::Second { first, op, second } => Entry::First {
            first: evaluate(&first, &second, op),
        },
        other => other,
    }
}

/// Append a character to whichever operand is active. No validation here:
/// a second decimal point or a `√` lands in the text as-is and surfaces as
/// an evaluator failure later.
fn append(entry: Entry, c: char) -> Entry {
    match entry {
        Entry::Idle => Entry::First {
            first: c.to_string(),
        },
        Entry::First { mut first } => {
            first.push(c);
            Entry::First { first }
        }
        Entry::Chosen { first, op } => Entry::Second {
            first,
            op,
            second: c.to_string(),
        },
        Entry::Second {
            first,
            op,
            mut second,
        } => {
            second.push(c);
            Entry::Second { first, op, second }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
