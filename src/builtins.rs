//! The three built-ins preloaded into every root environment.

use crate::environment::Environment;
use crate::error::{RuntimeError, RuntimeResult};
use crate::function::{Arity, FunctionValue, NativeFunction};
use crate::token::Position;
use crate::value::Value;
use std::rc::Rc;

fn native(name: &str, arity: Arity, func: impl Fn(&[Value]) -> RuntimeResult<Value> + 'static) -> Value {
    Value::Function(FunctionValue::Native(Rc::new(NativeFunction {
        name: name.to_string(),
        arity,
        func: Box::new(func),
    })))
}

/// `գրէ` — write the display form of each argument, space-separated, then a newline.
fn write_builtin(args: &[Value]) -> RuntimeResult<Value> {
    let line = args
        .iter()
        .map(Value::display_form)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
    Ok(Value::Null)
}

/// `թիվ` — convert to number; unparseable strings yield 0, never an error.
fn number_builtin(args: &[Value]) -> RuntimeResult<Value> {
    let v = match &args[0] {
        Value::Number(n) => *n,
        Value::Str(s) => s.parse::<f64>().unwrap_or(0.0),
        Value::Boolean(true) => 1.0,
        Value::Boolean(false) => 0.0,
        Value::Null | Value::Function(_) => 0.0,
    };
    Ok(Value::Number(v))
}

/// `բառ` — convert to string.
fn word_builtin(args: &[Value]) -> RuntimeResult<Value> {
    let v = match &args[0] {
        Value::Str(_) => args[0].clone(),
        Value::Null => Value::string(""),
        other => Value::string(other.display_form()),
    };
    Ok(v)
}

pub fn install(env: &Environment) {
    env.define("գրէ", native("գրէ", Arity::Variadic, write_builtin));
    env.define("թիվ", native("թիվ", Arity::Exact(1), number_builtin));
    env.define("բառ", native("բառ", Arity::Exact(1), word_builtin));
}

/// Checks arity before invoking a native function, producing the same error shape
/// user-function calls raise on a mismatch.
pub fn check_arity(name: &str, arity: Arity, got: usize, position: Position) -> RuntimeResult<()> {
    if arity.accepts(got) {
        Ok(())
    } else {
        let expected = match arity {
            Arity::Exact(n) => n,
            Arity::Variadic => return Ok(()),
        };
        Err(RuntimeError::WrongArity {
            name: name.to_string(),
            expected,
            got,
            position,
        })
    }
}
