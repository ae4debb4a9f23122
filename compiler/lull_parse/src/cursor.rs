//! Token cursor over the lazy lexer.
//!
//! The parser looks at exactly one token at a time; the next one is pulled
//! from the lexer only when the current one is consumed.

use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{Position, Token, TokenKind};
use lull_lexer::Lexer;

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> ScriptResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Cursor { lexer, current })
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_position(&self) -> Position {
        self.current.position
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Check the current token's kind, ignoring literal payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind.same_kind(&kind)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> ScriptResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume a token of `kind` or fail with "Expected X got Y".
    pub fn expect(&mut self, kind: TokenKind) -> ScriptResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.expect_error(kind.describe()))
        }
    }

    /// Consume an identifier and return its token.
    pub fn expect_ident(&mut self) -> ScriptResult<Token> {
        self.expect(TokenKind::Ident)
    }

    /// Consume the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> ScriptResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[cold]
    #[inline(never)]
    pub fn expect_error(&self, expected: &str) -> ScriptError {
        self.error(ErrorKind::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.kind.describe().to_string(),
        })
    }

    /// An error positioned at the current token.
    #[cold]
    pub fn error(&self, kind: ErrorKind) -> ScriptError {
        ScriptError::new(kind, self.current.position)
    }
}
