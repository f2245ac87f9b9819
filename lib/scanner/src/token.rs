use std::fmt::Display;

use cursor::Line;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    /// The slice of the source this token was scanned from. Empty only for
    /// `Eof`.
    pub lexeme: &'a str,
    pub line: Line,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData<'a>, lexeme: &'a str, line: Line) -> Token<'a> {
        Self { data, lexeme, line }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData<'a> {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    QuestionMark,
    Colon,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Str(&'a str),
    Number(f64),

    // Keywords.
    True,
    False,
    Nil,
    Print,

    Eof,
}

/// The reserved words. The grammar has no identifiers, so these are the only
/// words the scanner accepts.
#[derive(Debug, Clone, Copy, PartialEq, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Keyword {
    True,
    False,
    Nil,
    Print,
}

impl From<Keyword> for TokenData<'_> {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::True => TokenData::True,
            Keyword::False => TokenData::False,
            Keyword::Nil => TokenData::Nil,
            Keyword::Print => TokenData::Print,
        }
    }
}
