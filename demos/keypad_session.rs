//! Keypad Session
//!
//! This demo drives a calculator through a scripted mix of button clicks and
//! keystrokes, the same way a widget front end would feed it events.
//!
//! Key concepts:
//! - Clicks replace, extend or chain onto the display buffer
//! - Errors show as text and are never recorded
//! - History previews are truncated; clicking restores the full expression
//!
//! Run with: RUST_LOG=calcpad=debug cargo run --example keypad_session

use calcpad::input::{InputEvent, Key, Operator, ScriptedInput};
use calcpad::{CalculatorBuilder, Mode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");

    let mut calc = match CalculatorBuilder::new()
        .display(|text: &str| println!("  display: {:>16}", text))
        .on_history_insert(|entry| {
            println!(
                "  history: {} = {}",
                entry.display_expression, entry.display_result
            )
        })
        .build()
    {
        Ok(calc) => calc,
        Err(err) => {
            eprintln!("failed to build calculator: {err}");
            return;
        }
    };

    println!("Chaining onto a result:");
    let mut events = ScriptedInput::new()
        .click(Key::Digit(3))
        .click(Key::Operator(Operator::Add))
        .click(Key::Digit(4))
        .then(InputEvent::Submit)
        .click(Key::Operator(Operator::Multiply))
        .click(Key::Digit(6))
        .then(InputEvent::Submit);
    calc.run(&mut events);

    println!("\nErrors are shown, not recorded:");
    let mut events = ScriptedInput::new()
        .then(InputEvent::Escape)
        .typed("5÷0")
        .then(InputEvent::Submit)
        .then(InputEvent::Escape)
        .typed("2+")
        .then(InputEvent::Submit);
    calc.run(&mut events);

    println!("\nScientific keys:");
    let mut events = ScriptedInput::new()
        .then(InputEvent::ModeChange(Mode::Scientific))
        .then(InputEvent::Escape)
        .click(Key::Sqrt)
        .click(Key::Digit(8))
        .click(Key::Digit(1))
        .click(Key::RightParen)
        .click(Key::Operator(Operator::Add))
        .click(Key::Pi)
        .then(InputEvent::Submit);
    calc.run(&mut events);

    println!("\nLong expressions keep their full text:");
    let mut events = ScriptedInput::new()
        .then(InputEvent::Escape)
        .typed("1234567890+1")
        .then(InputEvent::Submit)
        .then(InputEvent::HistoryClick(0));
    calc.run(&mut events);

    println!("\nHistory (newest first):");
    for (index, entry) in calc.history().iter().enumerate() {
        println!(
            "  [{index}] {:<14} {:<14} (full: {})",
            entry.display_expression, entry.display_result, entry.original_expression
        );
    }

    println!("\n=== Session Complete ===");
}
