//! Terminal output helpers for user-facing status text.
//!
//! Diagnostics go through `tracing`; these helpers are only for the status
//! lines a user reads on every run.

/// Prints a section heading.
pub fn heading(text: &str) {
    println!("=== {text} ===\n");
}

/// Prints user-facing status text to stdout.
pub fn display(text: &str) {
    println!("{text}");
}
