//! Statements and blocks.
//!
//! Statements need no terminator: `var a = 3 var b = 4` is two statements.
//! Semicolons appear only inside a `for` header.

use lull_diagnostic::ScriptResult;
use lull_ir::{Stmt, StmtKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// `{ statement* }`
    pub(crate) fn parse_block(&mut self) -> ScriptResult<Vec<Stmt>> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> ScriptResult<Stmt> {
        match self.current_kind() {
            TokenKind::Var => self.parse_var(),
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::LBrace => {
                let position = self.current_position();
                let body = self.parse_block()?;
                Ok(Stmt::new(StmtKind::Block(body), position))
            }
            _ => {
                let expr = self.parse_expr()?;
                let position = expr.position;
                Ok(Stmt::new(StmtKind::Expr(expr), position))
            }
        }
    }

    /// `var name = expr`, positioned at the name.
    fn parse_var(&mut self) -> ScriptResult<Stmt> {
        self.expect(TokenKind::Var)?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let init = self.parse_expr()?;
        Ok(Stmt::new(
            StmtKind::Var {
                name: name.text,
                init,
            },
            name.position,
        ))
    }

    /// `return expr`, or a bare `return` right before the closing brace.
    fn parse_return(&mut self) -> ScriptResult<Stmt> {
        let keyword = self.expect(TokenKind::Return)?;
        let value = if self.check(TokenKind::RBrace) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        Ok(Stmt::new(StmtKind::Return(value), keyword.position))
    }

    /// `if (cond) { .. } [else { .. }]`
    fn parse_if(&mut self) -> ScriptResult<Stmt> {
        let keyword = self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.eat(TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            keyword.position,
        ))
    }

    /// `for ([init]; [cond]; [incr]) { .. }` where `init` is a `var`
    /// declaration or an expression.
    fn parse_for(&mut self) -> ScriptResult<Stmt> {
        let keyword = self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;

        let init = match self.current_kind() {
            TokenKind::Semi => None,
            TokenKind::Var => Some(Box::new(self.parse_var()?)),
            _ => {
                let expr = self.parse_expr()?;
                let position = expr.position;
                Some(Box::new(Stmt::new(StmtKind::Expr(expr), position)))
            }
        };
        self.expect(TokenKind::Semi)?;

        let condition = if self.check(TokenKind::Semi) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semi)?;

        let increment = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        Ok(Stmt::new(
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            },
            keyword.position,
        ))
    }
}
