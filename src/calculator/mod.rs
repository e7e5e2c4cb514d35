//! # Calculator Core
//!
//! Arithmetic evaluation for the expression buffer:
//! - `lexer`: turns buffer text into tokens, rejecting anything non-arithmetic
//! - `parser`: recursive-descent evaluation over `+ - * / ( )` and unary signs
//! - `format`: renders results back into buffer text
//! - `factorial`: standalone factorial helper with a defined overflow boundary
//!
//! There is no general-purpose code evaluation anywhere in this module. The
//! accepted alphabet is fixed at the lexer, so identifiers, calls and
//! assignments can never reach the evaluator.

mod error;
mod factorial;
mod format;
mod lexer;
mod parser;

pub use error::{EvaluationError, FactorialError};
pub use factorial::{factorial, MAX_FACTORIAL_INPUT};
pub use format::{format_result, DEFAULT_PRECISION, MAX_PRECISION};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::evaluate_expression;

/// Characters a key press may append to the buffer
pub const ARITHMETIC_KEYS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '(', ')', '.',
];

/// Check whether a single key character belongs to the arithmetic alphabet
pub fn is_arithmetic_key(ch: char) -> bool {
    ARITHMETIC_KEYS.contains(&ch)
}

/// Evaluate an expression and format the result with the given precision
pub fn evaluate_to_string(input: &str, precision: usize) -> Result<String, EvaluationError> {
    let value = evaluate_expression(input)?;
    Ok(format_result(value, precision))
}
