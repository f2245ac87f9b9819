use std::fmt::{Display, Formatter};

/// 1-based source line, incremented every time the cursor consumes a `\n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line(pub usize);

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    rest: &'a str,
    line: Line,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The full source is usually too verbose, so by default we only
        // print line/offset
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("offset", &self.offset())
                .finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.rest) == (other.source, other.rest)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, rest: source, line: Line(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    /// The source between `start` (a byte offset obtained from `offset`) and
    /// the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        if c == '\n' {
            self.line.0 += 1;
        }
        Some(c)
    }
}
