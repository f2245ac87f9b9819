use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

use cursor::Line;
use itertools::Itertools;

/// Collaborator that receives every diagnostic the pipeline produces. The
/// core never tracks whether an error occurred; that knowledge lives with
/// the reporter.
pub trait ErrorReporter {
    /// An error anchored to a source line only (lexical errors).
    fn report(&mut self, line: Line, message: &str);

    /// An error anchored to a token (parse and runtime errors). `lexeme` is
    /// the offending token's lexeme and is empty only at end of input.
    fn report_at(&mut self, line: Line, lexeme: &str, message: &str);
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub line: Line,
    /// `None` for bare line errors; the empty string stands for end of input.
    pub at: Option<String>,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.at.as_deref() {
            None => write!(f, "[line {}] Error: {}", self.line, self.message),
            Some("") => write!(f, "[line {}] Error at end: {}", self.line, self.message),
            Some(at) => write!(f, "[line {}] Error at '{}': {}", self.line, at, self.message),
        }
    }
}

/// Reporter that collects diagnostics in order, used by the driver and by
/// tests.
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.to_string()).join("\n"))
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, line: Line, message: &str) {
        self.0.push(Diagnostic { line, at: None, message: message.to_string() });
    }

    fn report_at(&mut self, line: Line, lexeme: &str, message: &str) {
        self.0.push(Diagnostic { line, at: Some(lexeme.to_string()), message: message.to_string() });
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(e: Diagnostic) -> Self {
        Self(vec![e])
    }
}

impl Deref for Diagnostics {
    type Target = Vec<Diagnostic>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Diagnostics {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
