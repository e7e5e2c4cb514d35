//! Non-interactive runs: `--eval` and `--factorial`.
//!
//! Results go to `out`, failures to `err`, and the returned status is what
//! the process should exit with.

use crate::calculator::{evaluate_to_string, factorial};
use crate::repl::models::INVALID_EXPRESSION_MESSAGE;
use std::io::{self, Write};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Evaluate `expression` once and print the formatted result
pub fn run_evaluation<O, E>(
    expression: &str,
    precision: usize,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8>
where
    O: Write,
    E: Write,
{
    match evaluate_to_string(expression, precision) {
        Ok(result) => {
            writeln!(out, "{result}")?;
            Ok(EXIT_SUCCESS)
        }
        Err(error) => {
            tracing::debug!("Evaluation of '{}' failed: {}", expression, error);
            writeln!(err, "{INVALID_EXPRESSION_MESSAGE}: {error}")?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Print `n!`
pub fn run_factorial<O, E>(n: i64, out: &mut O, err: &mut E) -> io::Result<u8>
where
    O: Write,
    E: Write,
{
    match factorial(n) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(EXIT_SUCCESS)
        }
        Err(error) => {
            writeln!(err, "{error}")?;
            Ok(EXIT_FAILURE)
        }
    }
}
