//! calculadora: A four-function keypad calculator for the terminal.

pub mod dispatch;
pub mod eval;
pub mod session;
pub mod tui;
pub mod types;
