//! The four-function evaluator over operand text.
//!
//! Operands stay strings until the moment of evaluation. Every failure,
//! whether an empty slot, unparseable text, or division by the literal
//! `"0"`, collapses to the same sentinel, which then circulates as
//! ordinary operand text and can itself be operated on.

use crate::types::{ERROR_SENTINEL, Op};

/// Evaluate `first op second` with both operands exactly as typed.
///
/// Never fails: errors come back as [`ERROR_SENTINEL`] so the result is
/// always displayable and always usable as the next first operand.
pub fn evaluate(first: &str, second: &str, op: Op) -> String {
    if first.is_empty() || second.is_empty() {
        return ERROR_SENTINEL.to_string();
    }
    // Division guards on the divisor text, not its value: "0" is an error,
    // while "0.0" or "-0" divide through to the IEEE infinities.
    if op == Op::Div && second == "0" {
        return ERROR_SENTINEL.to_string();
    }
    match (first.parse::<f64>(), second.parse::<f64>()) {
        (Ok(a), Ok(b)) => apply(a, b, op).to_string(),
        _ => ERROR_SENTINEL.to_string(),
    }
}

/// Evaluate with the operator given as its keypad symbol.
///
/// Unknown symbols yield the sentinel like any other failure; there is no
/// `√` or `%` arithmetic to fall back on.
pub fn evaluate_symbol(first: &str, symbol: &str, second: &str) -> String {
    match Op::from_symbol(symbol) {
        Some(op) => evaluate(first, second, op),
        None => ERROR_SENTINEL.to_string(),
    }
}

fn apply(a: f64, b: f64, op: Op) -> f64 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
    }
}

// ============================================================================
// TESTS
// ============================================================================
