//! Parser for Lull.
//!
//! Recursive descent for statements and top-level items, a precedence chain
//! for expressions. The parser pulls tokens lazily from
//! [`lull_lexer::Lexer`] and stops at the first error.
//!
//! ```text
//! program    = { import | function }
//! import     = "import" IDENT "." IDENT [ "as" IDENT ]
//! function   = "fun" IDENT "(" [ IDENT { "," IDENT } ] ")" block
//! block      = "{" { statement } "}"
//! statement  = "var" IDENT "=" expr | "return" [ expr ] | if | for | block | expr
//! expr       = assignment
//! assignment = or [ "=" assignment ]
//! or         = and { "|" and }
//! and        = equality { "&" equality }
//! equality   = comparison { ( "==" | "!=" ) comparison }
//! comparison = additive { ( ">" | ">=" | "<" | "<=" ) additive }
//! additive   = term { ( "+" | "-" ) term }
//! term       = unary { ( "*" | "/" | "%" ) unary }
//! unary      = ( "!" | "-" ) unary | postfix
//! postfix    = primary { "[" expr "]" | "." IDENT [ "(" args ")" ] }
//! ```

mod cursor;
mod grammar;


use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{FunctionTable, ImportDecl, Position, Token, TokenKind};

use cursor::Cursor;

/// Result of parsing one source text.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub functions: FunctionTable,
    /// Import declarations in source order.
    pub imports: Vec<ImportDecl>,
}

/// Parse a whole program or module.
pub fn parse_program(source: &str) -> ScriptResult<ParseOutput> {
    let mut parser = Parser::new(source)?;
    let output = parser.parse_program()?;
    tracing::debug!(
        functions = output.functions.len(),
        imports = output.imports.len(),
        "parsed program"
    );
    Ok(output)
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    /// Whether `>` may be consumed as a comparison operator. Cleared while
    /// parsing dictionary values, where `>` closes the literal.
    gt_is_operator: bool,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned at the first token of `source`.
    pub fn new(source: &'src str) -> ScriptResult<Self> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
            gt_is_operator: true,
        })
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_position(&self) -> Position {
        self.cursor.current_position()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> ScriptResult<Token> {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> ScriptResult<Token> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> ScriptResult<Token> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> ScriptResult<bool> {
        self.cursor.eat(kind)
    }

    #[cold]
    fn error(&self, kind: ErrorKind) -> ScriptError {
        self.cursor.error(kind)
    }

    /// Describe the current token for error messages.
    fn found(&self) -> String {
        self.current_kind().describe().to_string()
    }

    /// Run `f` with `>` treated as an operator or not, restoring the
    /// previous setting afterwards.
    fn with_gt_operator<T>(
        &mut self,
        enabled: bool,
        f: impl FnOnce(&mut Self) -> ScriptResult<T>,
    ) -> ScriptResult<T> {
        let saved = std::mem::replace(&mut self.gt_is_operator, enabled);
        let result = f(self);
        self.gt_is_operator = saved;
        result
    }
}
