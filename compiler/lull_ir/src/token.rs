//! Token definitions shared by the lexer and the parser.

use std::fmt;
use std::mem;

use crate::{Position, TypeTag};

/// A lexed token: its kind, the source text it was read from, and where it
/// starts.
///
/// For string literals `text` holds the contents without the quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// The end-of-input token at `position`.
    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }
}

/// Closed set of token kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Str,
    Ident,
    TypeTag(TypeTag),

    // Keywords
    Fun,
    Var,
    Return,
    If,
    Else,
    For,
    Import,
    As,
    True,
    False,
    Null,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqEq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Amp,
    Pipe,
    Bang,

    // Punctuation
    Comma,
    Semi,
    Colon,
    Dot,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    Eof,
}

impl TokenKind {
    /// Compare kinds ignoring literal payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Human-readable description used in syntax errors.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Str => "string",
            TokenKind::Ident => "identifier",
            TokenKind::TypeTag(_) => "type name",
            TokenKind::Fun => "'fun'",
            TokenKind::Var => "'var'",
            TokenKind::Return => "'return'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::Import => "'import'",
            TokenKind::As => "'as'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Assign => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Amp => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Bang => "'!'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
