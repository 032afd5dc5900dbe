//! Soorj: an interpreter for a small dynamically-typed scripting language whose
//! entire surface syntax is written in the Armenian script.
//!
//! ```
//! use soorj::Engine;
//!
//! let engine = Engine::new();
//! let env = engine.new_root_environment();
//! engine.run_source("ա = 1 + 2", &env).unwrap();
//! assert_eq!(env.get("ա"), Some(soorj::Value::Number(3.0)));
//! ```

pub mod ast;
pub mod builtins;
pub mod engine;
pub mod environment;
pub mod error;
pub mod error_parsing;
pub mod function;
pub mod parse;
pub mod token;
pub mod value;

pub use engine::Engine;
pub use environment::Environment;
pub use error::{RuntimeError, RuntimeResult};
pub use error_parsing::ParseError;
pub use token::{LexError, Position};
pub use value::Value;

use ast::Program;
use parse::Parser;
use token::Scanner;

/// Any failure from tokenizing, parsing, or evaluating a source string.
#[derive(Debug)]
pub enum SoorjError {
    Lex(LexError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl std::fmt::Display for SoorjError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{}", e),
            Self::Parse(e) => write!(f, "{}", e),
            Self::Runtime(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SoorjError {}

impl From<LexError> for SoorjError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for SoorjError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for SoorjError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

/// Tokenizes and parses a source string without evaluating it. Used by the REPL to
/// decide whether a line is a single bare expression statement worth echoing.
pub fn parse_source(source: &str) -> Result<Program, SoorjError> {
    let tokens = Scanner::new(source).tokenize()?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(program)
}

impl Engine {
    /// Tokenizes, parses, and runs `source` against `env` in one step — the core's
    /// primary entry point for running a whole file against a fresh environment.
    pub fn run_source(&self, source: &str, env: &Environment) -> Result<(), SoorjError> {
        let program = parse_source(source)?;
        self.run(&program, env)?;
        Ok(())
    }
}
