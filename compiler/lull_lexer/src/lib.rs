//! Lexer for Lull using logos.
//!
//! [`Lexer`] hands out one [`Token`] per call and tracks the 1-based
//! line/column of every token it produces. Whitespace and `//` comments are
//! skipped. Lexing stops at the first error.

use logos::Logos;
use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{Position, Token, TokenKind, TypeTag};


/// Raw token from logos (before position tracking).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\x0C]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("fun")]
    Fun,
    #[token("var")]
    Var,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("import")]
    Import,
    #[token("as")]
    As,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Type tags
    #[token("NULL")]
    NullTag,
    #[token("NUMBER")]
    NumberTag,
    #[token("STRING")]
    StringTag,
    #[token("BOOLEAN")]
    BooleanTag,
    #[token("ARRAY")]
    ArrayTag,
    #[token("STRUCTURE")]
    StructureTag,
    #[token("FUNCTION")]
    FunctionTag,

    // Literals
    #[regex(r"[0-9][0-9.]*")]
    Number,
    #[regex(r#""[^"]*""#)]
    Str,
    #[regex(r"\p{L}[\p{L}\p{Nd}]*")]
    Ident,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("!")]
    Bang,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

/// Position-tracking tokenizer over one source text.
///
/// After the end of input every call to [`Lexer::next_token`] returns an
/// [`TokenKind::Eof`] token.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Byte offset up to which `line`/`column` have been computed.
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Produce the next token, skipping trivia.
    pub fn next_token(&mut self) -> ScriptResult<Token> {
        loop {
            let Some(result) = self.raw.next() else {
                let end = self.position_at(self.source.len());
                return Ok(Token::eof(end));
            };
            let span = self.raw.span();
            let slice = self.raw.slice();
            let position = self.position_at(span.start);

            match result {
                Ok(RawToken::LineComment) => {}
                Ok(raw) => return convert_token(raw, slice, position),
                Err(()) => return Err(lex_error(slice, position)),
            }
        }
    }

    /// Advance the line/column counters to `offset` and return the position
    /// there. Offsets must not decrease between calls.
    fn position_at(&mut self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        if offset > self.offset {
            for ch in self.source[self.offset..offset].chars() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = offset;
        }
        Position::new(self.line, self.column)
    }
}

/// Lex `source` completely. The last token is always [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> ScriptResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn convert_token(raw: RawToken, slice: &str, position: Position) -> ScriptResult<Token> {
    let kind = match raw {
        RawToken::Number => match slice.parse::<f64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => {
                return Err(ScriptError::new(
                    ErrorKind::InvalidNumber {
                        text: slice.to_string(),
                    },
                    position,
                ))
            }
        },
        RawToken::Str => {
            let contents = &slice[1..slice.len() - 1];
            return Ok(Token::new(TokenKind::Str, contents, position));
        }
        RawToken::Ident => TokenKind::Ident,

        RawToken::NullTag => TokenKind::TypeTag(TypeTag::Null),
        RawToken::NumberTag => TokenKind::TypeTag(TypeTag::Number),
        RawToken::StringTag => TokenKind::TypeTag(TypeTag::String),
        RawToken::BooleanTag => TokenKind::TypeTag(TypeTag::Boolean),
        RawToken::ArrayTag => TokenKind::TypeTag(TypeTag::Array),
        RawToken::StructureTag => TokenKind::TypeTag(TypeTag::Structure),
        RawToken::FunctionTag => TokenKind::TypeTag(TypeTag::Function),

        RawToken::Fun => TokenKind::Fun,
        RawToken::Var => TokenKind::Var,
        RawToken::Return => TokenKind::Return,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::Import => TokenKind::Import,
        RawToken::As => TokenKind::As,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Assign => TokenKind::Assign,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Bang => TokenKind::Bang,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,

        // Filtered out by `next_token`.
        RawToken::LineComment => TokenKind::Eof,
    };
    Ok(Token::new(kind, slice, position))
}

/// Classify a slice logos could not match.
#[cold]
fn lex_error(slice: &str, position: Position) -> ScriptError {
    let kind = match slice.chars().next() {
        Some('"') => ErrorKind::UnterminatedString,
        Some(ch) => ErrorKind::UnknownChar { ch },
        None => ErrorKind::UnknownChar { ch: '\0' },
    };
    ScriptError::new(kind, position)
}
