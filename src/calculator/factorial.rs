//! Factorial helper.
//!
//! Not bound to any key; exposed through the library and `--factorial`.

use super::error::FactorialError;

/// Largest input whose factorial fits in a `u128`
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Compute `n!` recursively.
///
/// Negative inputs and inputs above [`MAX_FACTORIAL_INPUT`] are rejected
/// before any recursion happens, so stack depth never exceeds 34 frames.
pub fn factorial(n: i64) -> Result<u128, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(FactorialError::Overflow(n));
    }
    Ok(factorial_unchecked(n as u128))
}

fn factorial_unchecked(n: u128) -> u128 {
    if n <= 1 {
        1
    } else {
        n * factorial_unchecked(n - 1)
    }
}
