//! TUI module for the interactive calculator.
//!
//! Organized along FP boundaries:
//! - `state`: pure data types (App, Action)
//! - `update`: pure transitions
//! - `keypad`: button tables and geometry
//! - `theme`: style constants
//! - `view`: pure rendering
//! - `run`: effects (terminal lifecycle, event loop)

pub mod keypad;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
