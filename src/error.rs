//! Runtime error type produced by the evaluator.
//!
//! `RuntimeError` doubles as the evaluator's control-flow channel: `Return` is not an
//! error at all, it is the pseudo-error used to unwind a function body back to its
//! call frame.

use crate::token::Position;
use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub enum RuntimeError {
    UndefinedVariable(String, Position),
    NotAFunction(String, Position),
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
        position: Position,
    },
    TypeError(String, Position),
    DivisionByZero(Position),
    Other(String, Position),

    /// Not an error: carries the value of a `տուր` statement up to its call frame.
    Return(Value, Position),
}

impl RuntimeError {
    pub fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable(_, p)
            | Self::NotAFunction(_, p)
            | Self::WrongArity { position: p, .. }
            | Self::TypeError(_, p)
            | Self::DivisionByZero(p)
            | Self::Other(_, p)
            | Self::Return(_, p) => *p,
        }
    }

    /// True for variants that are internal control flow, not user-observable errors.
    pub fn is_pseudo_error(&self) -> bool {
        matches!(self, Self::Return(..))
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UndefinedVariable(name, pos) => {
                write!(f, "Runtime error at {}: undefined variable '{}'", pos, name)
            }
            Self::NotAFunction(name, pos) => {
                write!(f, "Runtime error at {}: '{}' is not a function", pos, name)
            }
            Self::WrongArity {
                name,
                expected,
                got,
                position,
            } => write!(
                f,
                "Runtime error at {}: function {} expects {} argument(s), got {}",
                position, name, expected, got
            ),
            Self::TypeError(msg, pos) => write!(f, "Runtime error at {}: {}", pos, msg),
            Self::DivisionByZero(pos) => write!(f, "Runtime error at {}: division by zero", pos),
            Self::Other(msg, pos) => write!(f, "Runtime error at {}: {}", pos, msg),
            Self::Return(_, pos) => write!(f, "<stray return at {}>", pos),
        }
    }
}

impl std::error::Error for RuntimeError {}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
