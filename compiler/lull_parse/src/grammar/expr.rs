//! Expression parsing: assignment and the binary operator chain.

use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{BinaryOp, Expr, ExprKind, TokenKind, UnaryOp};

use lull_stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input does not
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> ScriptResult<Expr> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `target = value`, right-associative. Only identifiers and index
    /// expressions are valid targets.
    fn parse_assignment(&mut self) -> ScriptResult<Expr> {
        let target = self.parse_binary_or()?;
        if !self.check(TokenKind::Assign) {
            return Ok(target);
        }
        let assign_token = self.advance()?;
        let value = Box::new(self.parse_expr()?);

        let Expr { kind, position } = target;
        let kind = match kind {
            ExprKind::Ident(name) => ExprKind::Assign { name, value },
            ExprKind::Index { target, index } => ExprKind::SetIndex {
                target,
                index,
                value,
            },
            _ => {
                return Err(ScriptError::new(
                    ErrorKind::InvalidAssignmentTarget,
                    assign_token.position,
                ))
            }
        };
        Ok(Expr::new(kind, position))
    }

    /// Parse `|` (lowest precedence binary).
    fn parse_binary_or(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_or_op, Self::parse_binary_and)
    }

    /// Parse `&`.
    fn parse_binary_and(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_and_op, Self::parse_equality)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_equality_op, Self::parse_comparison)
    }

    /// Parse `<`, `<=`, `>` and `>=`.
    fn parse_comparison(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_comparison_op, Self::parse_additive)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_additive_op, Self::parse_multiplicative)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> ScriptResult<Expr> {
        self.parse_binary_level(Self::match_multiplicative_op, Self::parse_unary)
    }

    /// One left-associative precedence level. The node is positioned at its
    /// operator token.
    fn parse_binary_level(
        &mut self,
        match_op: fn(&Self) -> Option<BinaryOp>,
        parse_operand: fn(&mut Self) -> ScriptResult<Expr>,
    ) -> ScriptResult<Expr> {
        let mut left = parse_operand(self)?;
        while let Some(op) = match_op(self) {
            let op_token = self.advance()?;
            let right = parse_operand(self)?;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                op_token.position,
            );
        }
        Ok(left)
    }

    /// Parse `!x` and `-x`; binds tighter than any binary operator.
    fn parse_unary(&mut self) -> ScriptResult<Expr> {
        if let Some(op) = self.match_unary_op() {
            let op_token = self.advance()?;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                op_token.position,
            ));
        }
        self.parse_postfix()
    }

    // Operator matching

    fn match_or_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::Pipe).then_some(BinaryOp::Or)
    }

    fn match_and_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::Amp).then_some(BinaryOp::And)
    }

    fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt if self.gt_is_operator => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
