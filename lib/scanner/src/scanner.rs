use cursor::Cursor;
use report::ErrorReporter;

pub mod token;
pub use token::{Token, TokenData};
use token::{Keyword, TokenData::*};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected word '{0}'.")]
    UnexpectedWord(String),
    #[error("Invalid number '{0}'.")]
    InvalidNumber(String),
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    start: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), start: 0, tokens: Vec::new() }
    }

    /// Scans the whole source. Lexical errors are reported and skipped, so
    /// the returned vector is always terminated by exactly one `Eof` token.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token<'a>> {
        while let Some(c) = self.cursor.peek() {
            self.start = self.cursor.offset();
            self.cursor.next();
            match c {
                '(' => self.add_token(LeftParen),
                ')' => self.add_token(RightParen),
                '{' => self.add_token(LeftBrace),
                '}' => self.add_token(RightBrace),
                ',' => self.add_token(Comma),
                '.' => self.add_token(Dot),
                '-' => self.add_token(Minus),
                '+' => self.add_token(Plus),
                ';' => self.add_token(Semicolon),
                '*' => self.add_token(Star),
                '?' => self.add_token(QuestionMark),
                ':' => self.add_token(Colon),

                '!' => {
                    if self.consume_if_matches('=') {
                        self.add_token(BangEqual)
                    } else {
                        self.add_token(Bang)
                    }
                }

                '=' => {
                    if self.consume_if_matches('=') {
                        self.add_token(EqualEqual)
                    } else {
                        self.add_token(Equal)
                    }
                }

                '<' => {
                    if self.consume_if_matches('=') {
                        self.add_token(LessEqual)
                    } else {
                        self.add_token(Less)
                    }
                }

                '>' => {
                    if self.consume_if_matches('=') {
                        self.add_token(GreaterEqual)
                    } else {
                        self.add_token(Greater)
                    }
                }

                '/' => {
                    if self.consume_if_matches('/') {
                        // Comment, runs to the end of the line
                        while matches!(self.cursor.peek(), Some(c) if c != '\n') {
                            self.cursor.next();
                        }
                    } else {
                        self.add_token(Slash)
                    }
                }

                '"' => self.string(reporter),

                d if d.is_ascii_digit() => self.number(reporter),

                w if w.is_ascii_alphabetic() || w == '_' => self.word(reporter),

                // The cursor already counted any newline
                ' ' | '\r' | '\t' | '\n' => (),

                // TODO coalesce a run of adjacent unexpected characters into
                // one diagnostic
                c => self.report(reporter, ScanError::UnexpectedCharacter(c)),
            }
        }
        self.tokens.push(Token { data: Eof, lexeme: "", line: self.cursor.line() });
        self.tokens
    }

    fn string(&mut self, reporter: &mut dyn ErrorReporter) {
        let content_start = self.cursor.offset();
        loop {
            match self.cursor.peek() {
                Some('"') => {
                    let content = self.cursor.slice_from(content_start);
                    self.cursor.next();
                    self.add_token(Str(content));
                    return;
                }
                // Strings may span lines, the cursor counts the newlines
                Some(_) => {
                    self.cursor.next();
                }
                None => {
                    self.report(reporter, ScanError::UnterminatedString);
                    return;
                }
            }
        }
    }

    fn number(&mut self, reporter: &mut dyn ErrorReporter) {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            self.cursor.next();
        }

        // A fractional part only starts with `.` when a digit follows, a
        // trailing dot belongs to the next token
        if self.cursor.peek() == Some('.')
            && matches!(self.cursor.peek_next(), Some(c) if c.is_ascii_digit())
        {
            self.cursor.next();
            while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
                self.cursor.next();
            }
        }

        let lexeme = self.cursor.slice_from(self.start);
        match lexeme.parse() {
            Ok(n) => self.add_token(Number(n)),
            Err(_) => self.report(reporter, ScanError::InvalidNumber(lexeme.to_string())),
        }
    }

    fn word(&mut self, reporter: &mut dyn ErrorReporter) {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.cursor.next();
        }

        let word = self.cursor.slice_from(self.start);
        match word.parse::<Keyword>() {
            Ok(keyword) => self.add_token(keyword.into()),
            Err(_) => self.report(reporter, ScanError::UnexpectedWord(word.to_string())),
        }
    }

    fn add_token(&mut self, data: TokenData<'a>) {
        self.tokens.push(Token {
            data,
            lexeme: self.cursor.slice_from(self.start),
            line: self.cursor.line(),
        })
    }

    fn consume_if_matches(&mut self, expected: char) -> bool {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.cursor.next();
                true
            }
            _ => false,
        }
    }

    fn report(&self, reporter: &mut dyn ErrorReporter, error: ScanError) {
        reporter.report(self.cursor.line(), &error.to_string());
    }
}
