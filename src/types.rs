//! Domain types for calculadora.
//!
//! The keypad vocabulary (`Token`, `Op`) and the calculation state
//! (`Entry`). These types are the spec of the accumulator: which operand is
//! active is a property of the `Entry` phase, never a derived boolean, so
//! illegal combinations (an operator without a first operand, a second
//! operand without an operator) are unrepresentable.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Display text when nothing has been entered.
pub const DISPLAY_ZERO: &str = "0";

/// Sentinel text shown in place of a result when a computation fails:
/// missing or malformed operand, or division by the literal `"0"`.
pub const ERROR_SENTINEL: &str = "Erro";

// ============================================================================
// OPERATORS
// ============================================================================

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// The keypad character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Parse an operator symbol. Returns `None` for anything that is not
    /// exactly one of `+ - * /`.
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// A single keypad input — one button press worth.
///
/// `Sqrt` and `Percent` are the two "special function" keys behind the `E`
/// toggle. They dispatch through the same channel as every other key but the
/// evaluator has no case for them, so the accumulator routes them to the
/// append branch and they land in an operand as literal `√`/`%` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit key, `0`..=`9`.
    Digit(u8),
    /// The decimal point key.
    Dot,
    /// An operator key.
    Op(Op),
    /// The `=` key.
    Equals,
    /// The `C` key.
    Clear,
    /// The `√` key (no evaluator support; appends literally).
    Sqrt,
    /// The `%` key (no evaluator support; appends literally).
    Percent,
}

impl Token {
    /// The character printed on the key. For tokens that route to the
    /// append branch this is also the character appended to the operand.
    pub fn glyph(self) -> char {
        match self {
            Token::Digit(n) => (b'0' + n) as char,
            Token::Dot => '.',
            Token::Op(op) => op.symbol(),
            Token::Equals => '=',
            Token::Clear => 'C',
            Token::Sqrt => '√',
            Token::Percent => '%',
        }
    }

    /// Map a typed character to its keypad token.
    ///
    /// Returns `None` for characters with no key: `E` (the specials toggle
    /// is not a calculation token), `q`, and letters in general. Clear
    /// accepts both cases since `C` is awkward to type shifted.
    pub fn from_glyph(c: char) -> Option<Token> {
        match c {
            '0'..='9' => Some(Token::Digit(c as u8 - b'0')),
            '.' => Some(Token::Dot),
            '+' => Some(Token::Op(Op::Add)),
            '-' => Some(Token::Op(Op::Sub)),
            '*' => Some(Token::Op(Op::Mul)),
            '/' => Some(Token::Op(Op::Div)),
            '=' => Some(Token::Equals),
            'C' | 'c' => Some(Token::Clear),
            '√' => Some(Token::Sqrt),
            '%' => Some(Token::Percent),
            _ => None,
        }
    }
}

// ============================================================================
// CALCULATION STATE
// ============================================================================

/// The operand/operator accumulator state.
///
/// Operand entry walks four phases:
///
/// ```text
/// Idle → First → Chosen → Second → (=) → First
/// ```
///
/// `C` returns to `Idle` from anywhere. `=` stores the computed result —
/// including the error sentinel — as the new first operand, so results chain
/// into further operations.
///
/// `first` is never empty outside `Idle` and `second` is never empty in
/// `Second`: tokens only ever append characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// Nothing entered; the display shows `"0"`.
    Idle,
    /// Typing the first operand, or holding a prior result.
    First { first: String },
    /// An operator is chosen; the next character starts the second operand.
    Chosen { first: String, op: Op },
    /// Typing the second operand; `=` is now meaningful.
    Second {
        first: String,
        op: Op,
        second: String,
    },
}

/// A fresh accumulator has nothing entered.
impl Default for Entry {
    fn default() -> Self {
        Entry::Idle
    }
}

impl Entry {
    /// The left-hand operand text; `""` when nothing has been entered.
    pub fn first_operand(&self) -> &str {
        match self {
            Entry::Idle => "",
            Entry::First { first }
            | Entry::Chosen { first, .. }
            | Entry::Second { first, .. } => first,
        }
    }

    /// The pending operator, if one has been chosen.
    pub fn operator(&self) -> Option<Op> {
        match self {
            Entry::Idle | Entry::First { .. } => None,
            Entry::Chosen { op, .. } | Entry::Second { op, .. } => Some(*op),
        }
    }

    /// The right-hand operand text; `""` until a character starts it.
    pub fn second_operand(&self) -> &str {
        match self {
            Entry::Second { second, .. } => second,
            _ => "",
        }
    }

    /// The text the display shows: the operand currently receiving input,
    /// the held result, or `"0"` when nothing has been entered.
    pub fn display(&self) -> &str {
        match self {
            Entry::Idle => DISPLAY_ZERO,
            Entry::First { first } | Entry::Chosen { first, .. } => first,
            Entry::Second { second, .. } => second,
        }
    }

    /// Whether the operand texts uphold the phase invariants (`first`
    /// non-empty outside `Idle`, `second` non-empty in `Second`).
    ///
    /// Dispatch preserves this by construction; restored sessions are
    /// checked against it before being trusted.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Entry::Idle => true,
            Entry::First { first } | Entry::Chosen { first, .. } => !first.is_empty(),
            Entry::Second { first, second, .. } => !first.is_empty() && !second.is_empty(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
