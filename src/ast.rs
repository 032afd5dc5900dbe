//! Abstract syntax tree produced by the parser and consumed by the evaluator.

use crate::token::Position;
use smallvec::SmallVec;

/// Call arguments and parameter lists are almost always short, so they stay on the
/// stack for the common case instead of heap-allocating a `Vec`.
pub type ExprList = SmallVec<[Expr; 4]>;
pub type ParamList = SmallVec<[String; 4]>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Str(String),
    Boolean(bool),
    Null,
    Identifier(String, Position),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: Position,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        position: Position,
    },
    Assign {
        target: String,
        value: Box<Expr>,
        position: Position,
    },
    Call {
        callee: String,
        args: ExprList,
        position: Position,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    If {
        condition: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    Return {
        value: Option<Expr>,
        position: Position,
    },
    FunctionDecl {
        name: String,
        params: ParamList,
        body: Vec<Stmt>,
    },
}

pub type Program = Vec<Stmt>;
