//! Tree-walking evaluator.

use crate::ast::{BinaryOp, Expr, Program, Stmt, UnaryOp};
use crate::builtins;
use crate::environment::Environment;
use crate::error::{RuntimeError, RuntimeResult};
use crate::function::{FunctionValue, UserFunction};
use crate::token::Position;
use crate::value::Value;
use std::rc::Rc;

/// One engine per program run; owns no state beyond what's needed to evaluate,
/// matching the core's "no hidden singleton" contract — callers always pass an
/// explicit environment.
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Builds a fresh root environment preloaded with the three built-ins.
    pub fn new_root_environment(&self) -> Environment {
        let env = Environment::new_root();
        builtins::install(&env);
        env
    }

    /// Runs a full statement list against a (possibly already-populated) environment,
    /// the entry point the REPL uses to keep state across lines.
    pub fn run(&self, program: &Program, env: &Environment) -> RuntimeResult<()> {
        for stmt in program {
            self.exec_stmt(stmt, env)?;
        }
        Ok(())
    }

    /// Runs a single statement, returning the value of a trailing expression
    /// statement so the REPL's calculator echo can print it.
    pub fn run_statement(&self, stmt: &Stmt, env: &Environment) -> RuntimeResult<Option<Value>> {
        match stmt {
            Stmt::Expr(e) => self.eval_expr(e, env).map(Some),
            other => {
                self.exec_stmt(other, env)?;
                Ok(None)
            }
        }
    }

    fn exec_stmt(&self, stmt: &Stmt, env: &Environment) -> RuntimeResult<()> {
        match stmt {
            Stmt::Expr(expr) => {
                self.eval_expr(expr, env)?;
                Ok(())
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_block(then_block, env)
                } else if let Some(else_block) = else_block {
                    self.exec_block(else_block, env)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_block(body, env)?;
                }
                Ok(())
            }
            Stmt::Return { value, position } => {
                let v = match value {
                    Some(e) => self.eval_expr(e, env)?,
                    None => Value::Null,
                };
                Err(RuntimeError::Return(v, *position))
            }
            Stmt::FunctionDecl { name, params, body } => {
                let f = FunctionValue::User(Rc::new(UserFunction {
                    name: name.clone(),
                    params: params.clone(),
                    body: body.clone(),
                }));
                env.define(name.clone(), Value::Function(f));
                Ok(())
            }
        }
    }

    /// Bare blocks (`if`/`while` bodies) do not open a new scope — they execute
    /// directly in the current environment, only function calls push a frame.
    fn exec_block(&self, stmts: &[Stmt], env: &Environment) -> RuntimeResult<()> {
        for stmt in stmts {
            self.exec_stmt(stmt, env)?;
        }
        Ok(())
    }

    fn eval_expr(&self, expr: &Expr, env: &Environment) -> RuntimeResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Null => Ok(Value::Null),
            Expr::Identifier(name, position) => env
                .get(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone(), *position)),
            Expr::Assign {
                target,
                value,
                position: _,
            } => {
                let v = self.eval_expr(value, env)?;
                if !env.try_assign(target, v.clone()) {
                    env.define(target.clone(), v.clone());
                }
                Ok(v)
            }
            Expr::Unary {
                op,
                operand,
                position,
            } => self.eval_unary(*op, operand, env, *position),
            Expr::Binary {
                op,
                left,
                right,
                position,
            } => self.eval_binary(*op, left, right, env, *position),
            Expr::Call {
                callee,
                args,
                position,
            } => self.eval_call(callee, args, env, *position),
        }
    }

    fn eval_unary(
        &self,
        op: UnaryOp,
        operand: &Expr,
        env: &Environment,
        position: Position,
    ) -> RuntimeResult<Value> {
        let v = self.eval_expr(operand, env)?;
        match op {
            UnaryOp::Neg => match v {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::TypeError(
                    "invalid operand for unary -".to_string(),
                    position,
                )),
            },
            UnaryOp::Not => Ok(Value::Boolean(!v.is_truthy())),
        }
    }

    fn eval_binary(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
        position: Position,
    ) -> RuntimeResult<Value> {
        // Short-circuit: the right operand must not be evaluated when it can't affect
        // the result. Every other operator evaluates both sides unconditionally.
        match op {
            BinaryOp::And => {
                let l = self.eval_expr(left, env)?;
                if !l.is_truthy() {
                    return Ok(Value::Boolean(false));
                }
                let r = self.eval_expr(right, env)?;
                return Ok(Value::Boolean(r.is_truthy()));
            }
            BinaryOp::Or => {
                let l = self.eval_expr(left, env)?;
                if l.is_truthy() {
                    return Ok(Value::Boolean(true));
                }
                let r = self.eval_expr(right, env)?;
                return Ok(Value::Boolean(r.is_truthy()));
            }
            _ => {}
        }

        let l = self.eval_expr(left, env)?;
        let r = self.eval_expr(right, env)?;

        match op {
            BinaryOp::Add => match (&l, &r) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(_), _) | (_, Value::Str(_)) => {
                    Ok(Value::string(format!("{}{}", l.display_form(), r.display_form())))
                }
                _ => Err(RuntimeError::TypeError("invalid operands for +".to_string(), position)),
            },
            BinaryOp::Sub => numeric(&l, &r, position, "-", |a, b| a - b),
            BinaryOp::Mul => numeric(&l, &r, position, "*", |a, b| a * b),
            BinaryOp::Div => match (&l, &r) {
                (Value::Number(_), Value::Number(b)) if *b == 0.0 => {
                    Err(RuntimeError::DivisionByZero(position))
                }
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
                _ => Err(RuntimeError::TypeError("invalid operands for /".to_string(), position)),
            },
            BinaryOp::Rem => numeric(&l, &r, position, "%", |a, b| a % b),
            BinaryOp::Eq => Ok(Value::Boolean(l == r)),
            BinaryOp::NotEq => Ok(Value::Boolean(l != r)),
            BinaryOp::Lt => compare(&l, &r, position, "<", |a, b| a < b),
            BinaryOp::LtEq => compare(&l, &r, position, "<=", |a, b| a <= b),
            BinaryOp::Gt => compare(&l, &r, position, ">", |a, b| a > b),
            BinaryOp::GtEq => compare(&l, &r, position, ">=", |a, b| a >= b),
            BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
        }
    }

    fn eval_call(
        &self,
        callee: &str,
        args: &[Expr],
        env: &Environment,
        position: Position,
    ) -> RuntimeResult<Value> {
        let target = env
            .get(callee)
            .ok_or_else(|| RuntimeError::UndefinedVariable(callee.to_string(), position))?;
        let function = match target {
            Value::Function(f) => f,
            _ => return Err(RuntimeError::NotAFunction(callee.to_string(), position)),
        };

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg, env)?);
        }

        match function {
            FunctionValue::Native(native) => {
                builtins::check_arity(&native.name, native.arity, values.len(), position)?;
                (native.func)(&values)
            }
            FunctionValue::User(user) => {
                if values.len() != user.params.len() {
                    return Err(RuntimeError::WrongArity {
                        name: user.name.clone(),
                        expected: user.params.len(),
                        got: values.len(),
                        position,
                    });
                }
                // Dynamic scope: the new frame's parent is the *caller's* current
                // environment, not the function's defining environment.
                let call_env = Environment::child_of(env);
                for (param, value) in user.params.iter().zip(values.into_iter()) {
                    call_env.define(param.clone(), value);
                }
                match self.run(&user.body, &call_env) {
                    Ok(()) => Ok(Value::Null),
                    Err(RuntimeError::Return(v, _)) => Ok(v),
                    Err(e) => Err(e),
                }
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric(
    l: &Value,
    r: &Value,
    position: Position,
    op_name: &str,
    f: impl Fn(f64, f64) -> f64,
) -> RuntimeResult<Value> {
    match (l, r) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(*a, *b))),
        _ => Err(RuntimeError::TypeError(
            format!("invalid operands for {}", op_name),
            position,
        )),
    }
}

fn compare(
    l: &Value,
    r: &Value,
    position: Position,
    op_name: &str,
    f: impl Fn(f64, f64) -> bool,
) -> RuntimeResult<Value> {
    match (l, r) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(f(*a, *b))),
        _ => Err(RuntimeError::TypeError(
            format!("invalid operands for {}", op_name),
            position,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Parser;
    use crate::token::Scanner;

    fn run(src: &str) -> RuntimeResult<Environment> {
        let tokens = Scanner::new(src).tokenize().unwrap();
        let program = Parser::new(tokens).parse_program().unwrap();
        let engine = Engine::new();
        let env = engine.new_root_environment();
        engine.run(&program, &env)?;
        Ok(env)
    }

    #[test]
    fn assignment_creates_then_reads_back() {
        let env = run("ա = 10\nբ = ա + 5").unwrap();
        assert_eq!(env.get("բ"), Some(Value::Number(15.0)));
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let err = run("ա = 1 / 0").unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero(_)));
    }

    #[test]
    fn short_circuit_or_skips_right_side_call() {
        let env = run(
            "կանչված = ոչ\nգործ ֆ() {\n  կանչված = այո\n  տուր այո\n}\nարդ = այո կամ ֆ()",
        )
        .unwrap();
        assert_eq!(env.get("կանչված"), Some(Value::Boolean(false)));
    }

    #[test]
    fn function_without_return_yields_null() {
        let env = run("գործ ֆ() {\n  1 + 1\n}\nարդ = ֆ()").unwrap();
        assert_eq!(env.get("արդ"), Some(Value::Null));
    }

    #[test]
    fn equality_is_type_tag_aware() {
        let env = run("ա = (1 == \"1\")").unwrap();
        assert_eq!(env.get("ա"), Some(Value::Boolean(false)));
    }

    #[test]
    fn functions_see_caller_scope_dynamically() {
        let env = run(
            "ար = 1\nգործ ֆ() {\n  տուր ար\n}\nգործ փ() {\n  ար = 2\n  տուր ֆ()\n}\nարդ = փ()",
        )
        .unwrap();
        assert_eq!(env.get("արդ"), Some(Value::Number(2.0)));
    }
}
