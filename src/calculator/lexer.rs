//! Tokenizer for buffer text.
//!
//! The lexer is the gate that keeps evaluation arithmetic-only: every
//! character must be a digit, a decimal point, one of `+ - * /`, a
//! parenthesis, or whitespace.

use super::error::EvaluationError;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
        }
    }
}

/// A token together with the character offset it started at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Split `input` into arithmetic tokens.
///
/// Whitespace is skipped. Any other character outside the arithmetic
/// alphabet fails with `UnexpectedCharacter`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut position = 0;

    while let Some(&ch) = chars.peek() {
        let kind = match ch {
            c if c.is_whitespace() => {
                chars.next();
                position += 1;
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let (kind, consumed) = lex_number(&mut chars, position)?;
                tokens.push(Token::new(kind, position));
                position += consumed;
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            other => {
                return Err(EvaluationError::UnexpectedCharacter {
                    ch: other,
                    position,
                })
            }
        };

        chars.next();
        tokens.push(Token::new(kind, position));
        position += 1;
    }

    Ok(tokens)
}

/// Consume one numeric literal, returning the token kind and characters consumed
fn lex_number(
    chars: &mut Peekable<Chars<'_>>,
    start: usize,
) -> Result<(TokenKind, usize), EvaluationError> {
    let mut literal = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            chars.next();
        } else {
            break;
        }
    }

    let consumed = literal.chars().count();
    let malformed = || EvaluationError::MalformedNumber {
        literal: literal.clone(),
        position: start,
    };

    if literal.matches('.').count() > 1 || !literal.chars().any(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    let value: f64 = literal.parse().map_err(|_| malformed())?;
    Ok((TokenKind::Number(value), consumed))
}
