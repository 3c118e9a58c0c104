//! calculadora CLI
//!
//! A four-function keypad calculator for the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use calculadora::eval::evaluate_symbol;
use calculadora::session::default_session_path;
use calculadora::tui;

#[derive(Parser)]
#[command(name = "calculadora")]
#[command(about = "Four-function keypad calculator for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive calculator (the default when no command is given)
    Tui {
        /// Start blank, ignoring any saved session
        #[arg(long)]
        fresh: bool,

        /// Session file to restore from and save to
        #[arg(long, value_name = "FILE")]
        session_file: Option<PathBuf>,
    },

    /// Evaluate a single operation and print the result
    Eval {
        /// First operand, as typed on the keypad
        #[arg(allow_hyphen_values = true)]
        first: String,

        /// Operator symbol: +, -, * or /
        #[arg(allow_hyphen_values = true)]
        operator: String,

        /// Second operand, as typed on the keypad
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(false, None),
        Some(Commands::Tui { fresh, session_file }) => cmd_tui(fresh, session_file),
        Some(Commands::Eval { first, operator, second }) => cmd_eval(&first, &operator, &second),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(fresh: bool, session_file: Option<PathBuf>) -> Result<(), String> {
    let path = session_file.unwrap_or_else(default_session_path);
    tui::run::run(&path, fresh).map_err(|e| e.to_string())
}

/// Print the result of one operation. Failures print the same sentinel the
/// calculator displays and still exit zero.
fn cmd_eval(first: &str, operator: &str, second: &str) -> Result<(), String> {
    println!("{}", evaluate_symbol(first, operator, second));
    Ok(())
}
