mod expr;
mod stmt;

pub use expr::{Expr, LiteralValue};
pub use stmt::Stmt;

use report::ErrorReporter;
use scanner::{Token, TokenData};

use TokenData::*;

/// Raised after a syntax error was reported, unwinds to the statement loop
/// where `synchronize` resumes parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ParseError;

type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseErrorKind {
    ExpectedPrimaryExpression,
    ExpectedSemicolon,
    MissingRightParen,
    ExpectedColon,
    LeadingBinaryOperator,
    TooDeeplyNested,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ParseErrorKind::ExpectedPrimaryExpression => "Expected primary expression",
                ParseErrorKind::ExpectedSemicolon => "Expected semicolon after expression",
                ParseErrorKind::MissingRightParen => "Missing closing `)` after expression",
                ParseErrorKind::ExpectedColon => "Expected `:` in ternary expression",
                ParseErrorKind::LeadingBinaryOperator =>
                    "expressions cannot start with this operator",
                ParseErrorKind::TooDeeplyNested => "Expression nesting too deep",
            }
        )
    }
}

// Bounds the height of the parsed tree. The self-recursive productions
// (`expression`, `ternary`, `unary`) tick the counter while they are on the
// stack; the binary fold loops tick it once per consumed operator, since
// each iteration adds a level that stays in the tree. Evaluation, drop glue
// and Display all recurse to tree height, so a pathologically nested or
// pathologically long source fails with a diagnostic instead of blowing
// the stack.
const MAX_NESTING_DEPTH: usize = 255;

pub struct Parser<'t, 'r> {
    tokens: &'t [Token<'t>],
    current: usize,
    depth: usize,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'t, 'r> Parser<'t, 'r> {
    /// The token slice must be terminated by an `Eof` token, which the
    /// scanner guarantees.
    pub fn new(tokens: &'t [Token<'t>], reporter: &'r mut dyn ErrorReporter) -> Self {
        Self { tokens, current: 0, depth: 0, reporter }
    }

    /// Parses until `Eof`. Syntax errors go to the reporter and recovery
    /// happens at statement granularity, so one malformed statement never
    /// suppresses errors in the statements after it.
    pub fn parse(mut self) -> Vec<Stmt<'t>> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(ParseError) => self.synchronize(),
            }
        }
        statements
    }

    fn statement(&mut self) -> Result<Stmt<'t>> {
        self.depth = 0;
        if self.consume_if(Print) {
            self.print_statement()
        } else {
            self.expression_statement()
        }
    }

    fn print_statement(&mut self) -> Result<Stmt<'t>> {
        let value = self.expression()?;

        self.consume_or_error(Semicolon, ParseErrorKind::ExpectedSemicolon)?;

        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt<'t>> {
        let value = self.expression()?;

        self.consume_or_error(Semicolon, ParseErrorKind::ExpectedSemicolon)?;

        Ok(Stmt::Expression(value))
    }

    fn expression(&mut self) -> Result<Expr<'t>> {
        self.enter_nested()?;

        // A binary operator in prefix position would otherwise run all the
        // way down to `primary` and produce a misleading error there
        if let BangEqual | EqualEqual | Greater | GreaterEqual | Less | LessEqual | Plus
        | Slash | Star = self.peek().data
        {
            let operator = self.advance();
            return Err(self.error(operator, ParseErrorKind::LeadingBinaryOperator));
        }

        let expr = self.sequence()?;
        self.depth -= 1;
        Ok(expr)
    }

    fn sequence(&mut self) -> Result<Expr<'t>> {
        let mut expr = self.ternary()?;

        while let Comma = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.ternary()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right };
        }

        Ok(expr)
    }

    // The condition binds at equality precedence, both branches recurse into
    // `ternary` itself, which makes `a ? b : c ? d : e` associate right.
    fn ternary(&mut self) -> Result<Expr<'t>> {
        self.enter_nested()?;
        let mut expr = self.equality()?;

        if self.consume_if(QuestionMark) {
            let if_true = Box::new(self.ternary()?);
            self.consume_or_error(Colon, ParseErrorKind::ExpectedColon)?;
            let if_false = Box::new(self.ternary()?);
            expr = Expr::Ternary { condition: Box::new(expr), if_true, if_false };
        }

        self.depth -= 1;
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr<'t>> {
        let mut expr = self.comparison()?;

        while let BangEqual | EqualEqual = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.comparison()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr<'t>> {
        let mut expr = self.term()?;

        while let Greater | GreaterEqual | Less | LessEqual = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.term()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right };
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr<'t>> {
        let mut expr = self.factor()?;

        while let Minus | Plus = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.factor()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr<'t>> {
        let mut expr = self.unary()?;

        while let Slash | Star = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.unary()?);
            expr = Expr::Binary { left: Box::new(expr), operator, right };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr<'t>> {
        if let Bang | Minus = self.peek().data {
            self.enter_nested()?;
            let operator = self.advance();
            let right = Box::new(self.unary()?);
            self.depth -= 1;
            return Ok(Expr::Unary { operator, right });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr<'t>> {
        let token = self.peek();
        match token.data {
            False => {
                self.advance();
                Ok(Expr::Literal(LiteralValue::Boolean(false)))
            }
            True => {
                self.advance();
                Ok(Expr::Literal(LiteralValue::Boolean(true)))
            }
            Nil => {
                self.advance();
                Ok(Expr::Literal(LiteralValue::Nil))
            }
            Str(s) => {
                self.advance();
                Ok(Expr::Literal(LiteralValue::Str(s)))
            }
            Number(n) => {
                self.advance();
                Ok(Expr::Literal(LiteralValue::Number(n)))
            }
            LeftParen => {
                self.advance();
                let expr = self.expression()?;

                self.consume_or_error(RightParen, ParseErrorKind::MissingRightParen)?;

                Ok(Expr::Grouping(Box::new(expr)))
            }
            _ => Err(self.error(token, ParseErrorKind::ExpectedPrimaryExpression)),
        }
    }

    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().data == Semicolon {
                return;
            }
            if let Print = self.peek().data {
                return;
            }
            self.advance();
        }
    }

    fn enter_nested(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            Err(self.error(self.peek(), ParseErrorKind::TooDeeplyNested))
        } else {
            Ok(())
        }
    }

    fn error(&mut self, token: &Token, kind: ParseErrorKind) -> ParseError {
        self.reporter.report_at(token.line, token.lexeme, &kind.to_string());
        ParseError
    }
}

// Helpers
impl<'t, 'r> Parser<'t, 'r> {
    fn peek(&self) -> &'t Token<'t> {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &'t Token<'t> {
        &self.tokens[self.current - 1]
    }

    fn advance(&mut self) -> &'t Token<'t> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn consume_if(&mut self, data: TokenData) -> bool {
        assert!(!matches!(data, Number(_) | Str(_)));
        if self.peek().data == data {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume_or_error(
        &mut self,
        data: TokenData,
        kind: ParseErrorKind,
    ) -> Result<&'t Token<'t>> {
        if self.consume_if(data) {
            Ok(self.previous())
        } else {
            Err(self.error(self.peek(), kind))
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().data == Eof
    }
}
