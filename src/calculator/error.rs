//! Error types for expression evaluation and the factorial helper.

use thiserror::Error;

/// Reasons an expression buffer cannot be evaluated.
///
/// Positions are character offsets into the evaluated text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,
}

/// Inputs the factorial helper refuses to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FactorialError {
    #[error("factorial is undefined for negative input {0}")]
    Negative(i64),

    #[error("factorial of {0} does not fit in 128 bits")]
    Overflow(i64),
}
