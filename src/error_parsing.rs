//! Error type produced by the parser.

use crate::token::{Position, Token, TokenKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    pub fn unexpected(found: &TokenKind, position: Position, expected: &str) -> Self {
        Self::new(format!("expected {} but found '{}'", expected, found), position)
    }

    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        Self::new(message, token.position)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Syntax error at {}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}
