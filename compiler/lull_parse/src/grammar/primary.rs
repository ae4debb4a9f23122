//! Primary expressions and postfix accesses.

use lull_diagnostic::{ErrorKind, ScriptResult};
use lull_ir::{DictKey, Expr, ExprKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// A primary followed by any chain of `[index]`, `.field` and
    /// `.method(args)`.
    pub(crate) fn parse_postfix(&mut self) -> ScriptResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.check(TokenKind::LBracket) {
                let bracket = self.advance()?;
                let index = self.with_gt_operator(true, Self::parse_expr)?;
                self.expect(TokenKind::RBracket)?;
                expr = Expr::new(
                    ExprKind::Index {
                        target: Box::new(expr),
                        index: Box::new(index),
                    },
                    bracket.position,
                );
                continue;
            }
            if self.eat(TokenKind::Dot)? {
                let name = self.expect_ident()?;
                let kind = if self.check(TokenKind::LParen) {
                    ExprKind::MethodCall {
                        target: Box::new(expr),
                        method: name.text,
                        args: self.parse_call_args()?,
                    }
                } else {
                    ExprKind::Field {
                        target: Box::new(expr),
                        name: name.text,
                    }
                };
                expr = Expr::new(kind, name.position);
                continue;
            }
            return Ok(expr);
        }
    }

    fn parse_primary(&mut self) -> ScriptResult<Expr> {
        let position = self.current_position();
        let kind = match self.current_kind() {
            TokenKind::Number(value) => {
                self.advance()?;
                ExprKind::Number(value)
            }
            TokenKind::Str => ExprKind::Str(self.advance()?.text),
            TokenKind::True => {
                self.advance()?;
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance()?;
                ExprKind::Bool(false)
            }
            TokenKind::Null => {
                self.advance()?;
                ExprKind::Null
            }
            TokenKind::TypeTag(tag) => {
                self.advance()?;
                ExprKind::TypeTag(tag)
            }
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::Lt => return self.parse_dict(),
            TokenKind::Ident => {
                let name = self.advance()?.text;
                if self.check(TokenKind::LParen) {
                    ExprKind::Call {
                        callee: name,
                        args: self.parse_call_args()?,
                    }
                } else {
                    ExprKind::Ident(name)
                }
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.with_gt_operator(true, Self::parse_expr)?;
                self.expect(TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => {
                return Err(self.error(ErrorKind::BadFactor {
                    found: self.found(),
                }))
            }
        };
        Ok(Expr::new(kind, position))
    }

    /// `( [expr { , expr }] )`
    fn parse_call_args(&mut self) -> ScriptResult<Vec<Expr>> {
        self.expect(TokenKind::LParen)?;
        let args = self.with_gt_operator(true, |p| p.parse_comma_list(TokenKind::RParen))?;
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// `[ [expr { , expr }] ]`
    fn parse_list(&mut self) -> ScriptResult<Expr> {
        let open = self.expect(TokenKind::LBracket)?;
        let items = self.with_gt_operator(true, |p| p.parse_comma_list(TokenKind::RBracket))?;
        self.expect(TokenKind::RBracket)?;
        Ok(Expr::new(ExprKind::List(items), open.position))
    }

    /// Comma-separated expressions up to (not including) `close`.
    fn parse_comma_list(&mut self, close: TokenKind) -> ScriptResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.check(close) {
            return Ok(items);
        }
        items.push(self.parse_expr()?);
        while self.eat(TokenKind::Comma)? {
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }

    /// `< [key: expr { , key: expr }] >` where a key is a string literal or
    /// a bare identifier.
    ///
    /// Values are parsed with `>` disabled as an operator so the closing
    /// bracket is not taken for a comparison. Parenthesize to compare.
    fn parse_dict(&mut self) -> ScriptResult<Expr> {
        let open = self.expect(TokenKind::Lt)?;
        let mut entries = Vec::new();
        if !self.check(TokenKind::Gt) {
            loop {
                let key = match self.current_kind() {
                    TokenKind::Str => DictKey::Literal(self.advance()?.text),
                    TokenKind::Ident => DictKey::Name(self.advance()?.text),
                    _ => {
                        return Err(self.error(ErrorKind::ExpectedDictKey {
                            found: self.found(),
                        }))
                    }
                };
                self.expect(TokenKind::Colon)?;
                let value = self.with_gt_operator(false, Self::parse_expr)?;
                entries.push((key, value));
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(Expr::new(ExprKind::Dict(entries), open.position))
    }
}
