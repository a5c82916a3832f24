//! Output formatting helpers for the `repobot` CLI.

use std::io::{self, Write};

use serde::Serialize;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print one line per item to stdout.
pub fn output_lines<I, T>(items: I)
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for item in items {
        let _ = writeln!(handle, "{}", item);
    }
}

/// Print a configuration value for a human reader.
///
/// Strings are printed bare; everything else as pretty-printed JSON.
pub fn output_value(value: &serde_json::Value) {
    match value {
        serde_json::Value::String(s) => println!("{}", s),
        other => output_json(other),
    }
}
