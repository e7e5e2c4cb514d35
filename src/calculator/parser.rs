//! Recursive-descent evaluator.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('+' | '-') unary | primary
//! primary    := number | '(' expression ')'
//! ```
//!
//! Values are computed while parsing; no syntax tree is kept.

use super::error::EvaluationError;
use super::lexer::{tokenize, Token, TokenKind};

/// Maximum combined depth of parentheses and unary signs
const MAX_NESTING: usize = 256;

/// Evaluate an arithmetic expression to a finite `f64`.
pub fn evaluate_expression(input: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(match token.kind {
            TokenKind::RightParen => EvaluationError::UnbalancedParenthesis {
                position: token.position,
            },
            kind => EvaluationError::UnexpectedToken {
                found: kind.to_string(),
                position: token.position,
            },
        });
    }

    Ok(value)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.advance();
                    let rhs = self.term()?;
                    value = finite(value + rhs)?;
                }
                TokenKind::Minus => {
                    self.advance();
                    let rhs = self.term()?;
                    value = finite(value - rhs)?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.unary()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.advance();
                    let rhs = self.unary()?;
                    value = finite(value * rhs)?;
                }
                TokenKind::Slash => {
                    self.advance();
                    let rhs = self.unary()?;
                    if rhs == 0.0 {
                        return Err(EvaluationError::DivisionByZero);
                    }
                    value = finite(value / rhs)?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvaluationError> {
        match self.peek().map(|token| token.kind) {
            Some(TokenKind::Plus) => {
                self.advance();
                self.nested(|parser| parser.unary())
            }
            Some(TokenKind::Minus) => {
                self.advance();
                self.nested(|parser| parser.unary()).map(|value| -value)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvaluationError> {
        let token = self.advance().ok_or(EvaluationError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => finite(value),
            TokenKind::LeftParen => {
                let value = self.nested(|parser| parser.expression())?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => Ok(value),
                    Some(other) => Err(EvaluationError::UnexpectedToken {
                        found: other.kind.to_string(),
                        position: other.position,
                    }),
                    None => Err(EvaluationError::UnbalancedParenthesis {
                        position: token.position,
                    }),
                }
            }
            kind => Err(EvaluationError::UnexpectedToken {
                found: kind.to_string(),
                position: token.position,
            }),
        }
    }

    fn nested<F>(&mut self, parse: F) -> Result<f64, EvaluationError>
    where
        F: FnOnce(&mut Self) -> Result<f64, EvaluationError>,
    {
        if self.depth >= MAX_NESTING {
            return Err(EvaluationError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

fn finite(value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite)
    }
}
