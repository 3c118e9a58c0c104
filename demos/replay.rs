//! Replay a keypad sequence and print the display after each press.
//!
//! Run with: cargo run --example replay "12+7*3="

use std::env;

use calculadora::dispatch::dispatch;
use calculadora::types::{Entry, Token};

fn main() {
    let args: Vec<String> = env::args().collect();

    let keys = if args.len() > 1 {
        args[1].clone()
    } else {
        String::from("12+7*3=")
    };

    let mut entry = Entry::Idle;
    println!("display: {}", entry.display());

    for c in keys.chars() {
        let Some(token) = Token::from_glyph(c) else {
            eprintln!("ignoring '{c}': not a keypad key");
            continue;
        };
        entry = dispatch(entry, &token);
        println!("[{c}] -> {}", entry.display());
    }
}
