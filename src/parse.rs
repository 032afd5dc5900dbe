//! Recursive-descent parser: token stream to AST, one function per grammar rule.

use crate::ast::{BinaryOp, Expr, ExprList, ParamList, Program, Stmt, UnaryOp};
use crate::error_parsing::ParseError;
use crate::token::{Position, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.check(&TokenKind::Eof) {
            stmts.push(self.statement()?);
            self.skip_newlines();
        }
        Ok(stmts)
    }

    // --- token-stream primitives ---

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn advance(&mut self) -> &Token {
        if !self.check(&TokenKind::Eof) {
            self.current += 1;
        }
        self.previous()
    }

    fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let found = self.peek().kind.clone();
            let pos = self.peek().position;
            Err(ParseError::unexpected(&found, pos, what))
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, Position), ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok((name, tok.position))
            }
            other => Err(ParseError::unexpected(&other, tok.position, "an identifier")),
        }
    }

    // --- statements ---

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match &self.peek().kind {
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::Function => self.function_declaration(),
            _ => Ok(Stmt::Expr(self.expression()?)),
        }
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LeftBrace, "'{'")?;
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.check(&TokenKind::RightBrace) && !self.check(&TokenKind::Eof) {
            stmts.push(self.statement()?);
            self.skip_newlines();
        }
        self.expect(&TokenKind::RightBrace, "'}'")?;
        Ok(stmts)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // եթե
        let condition = self.expression()?;
        let then_block = self.block()?;
        self.skip_newlines();
        let else_block = if self.matches(&TokenKind::Else) {
            Some(self.block()?)
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // մինչև
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::While { condition, body })
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let position = self.peek().position;
        self.advance(); // տուր
        let value = if self.check(&TokenKind::Newline) || self.check(&TokenKind::Eof) || self.check(&TokenKind::RightBrace) {
            None
        } else {
            Some(self.expression()?)
        };
        Ok(Stmt::Return { value, position })
    }

    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // գործ
        let (name, _) = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut params = ParamList::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                let (param, _) = self.expect_identifier()?;
                params.push(param);
                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen, "')'")?;
        let body = self.block()?;
        Ok(Stmt::FunctionDecl { name, params, body })
    }

    // --- expressions, in precedence order ---

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logical_or()?;
        if self.check(&TokenKind::Assign) {
            let position = self.peek().position;
            self.advance();
            let value = self.assignment()?;
            return match expr {
                Expr::Identifier(name, _) => Ok(Expr::Assign {
                    target: name,
                    value: Box::new(value),
                    position,
                }),
                _ => Err(ParseError::new("invalid assignment target", position)),
            };
        }
        Ok(expr)
    }

    fn logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logical_and()?;
        while self.check(&TokenKind::Or) {
            let position = self.peek().position;
            self.advance();
            let right = self.logical_and()?;
            expr = Expr::Binary {
                op: BinaryOp::Or,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.check(&TokenKind::And) {
            let position = self.peek().position;
            self.advance();
            let right = self.equality()?;
            expr = Expr::Binary {
                op: BinaryOp::And,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        loop {
            let op = match &self.peek().kind {
                TokenKind::EqualsEquals => BinaryOp::Eq,
                TokenKind::NotEquals => BinaryOp::NotEq,
                _ => break,
            };
            let position = self.peek().position;
            self.advance();
            let right = self.comparison()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        loop {
            let op = match &self.peek().kind {
                TokenKind::Less => BinaryOp::Lt,
                TokenKind::LessEquals => BinaryOp::LtEq,
                TokenKind::Greater => BinaryOp::Gt,
                TokenKind::GreaterEquals => BinaryOp::GtEq,
                _ => break,
            };
            let position = self.peek().position;
            self.advance();
            let right = self.term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        loop {
            let op = match &self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let position = self.peek().position;
            self.advance();
            let right = self.factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        loop {
            let op = match &self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Rem,
                _ => break,
            };
            let position = self.peek().position;
            self.advance();
            let right = self.unary()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                position,
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match &self.peek().kind {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.call(),
        };
        let position = self.peek().position;
        self.advance();
        let operand = self.unary()?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            position,
        })
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let expr = self.primary()?;
        if self.check(&TokenKind::LeftParen) {
            let position = self.peek().position;
            let callee = match expr {
                Expr::Identifier(name, _) => name,
                _ => return Err(ParseError::new("invalid function call", position)),
            };
            self.advance();
            let mut args = ExprList::new();
            if !self.check(&TokenKind::RightParen) {
                loop {
                    args.push(self.expression()?);
                    if !self.matches(&TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(&TokenKind::RightParen, "')'")?;
            return Ok(Expr::Call {
                callee,
                args,
                position,
            });
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::True => {
                self.advance();
                Ok(Expr::Boolean(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Boolean(false))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expr::Null)
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr::Str(s))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::Identifier(name, tok.position))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.expect(&TokenKind::RightParen, "')'")?;
                Ok(expr)
            }
            other => Err(ParseError::unexpected(&other, tok.position, "an expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Scanner;

    fn parse(src: &str) -> Program {
        let tokens = Scanner::new(src).tokenize().unwrap();
        Parser::new(tokens).parse_program().unwrap()
    }

    #[test]
    fn parses_assignment_and_binary_precedence() {
        let prog = parse("ա = 1 + 2 * 3");
        assert_eq!(prog.len(), 1);
        match &prog[0] {
            Stmt::Expr(Expr::Assign { target, .. }) => assert_eq!(target, "ա"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_call_on_non_identifier() {
        let tokens = Scanner::new("1()").tokenize().unwrap();
        assert!(Parser::new(tokens).parse_program().is_err());
    }

    #[test]
    fn rejects_assignment_to_non_identifier() {
        let tokens = Scanner::new("1 = 2").tokenize().unwrap();
        assert!(Parser::new(tokens).parse_program().is_err());
    }

    #[test]
    fn parses_if_while_function() {
        let prog = parse("գործ ֆ(ա) {\n  տուր ա\n}\nմինչև այո {\n  եթե ոչ { տուր } հպ { տուր 1 }\n}");
        assert_eq!(prog.len(), 2);
    }
}
