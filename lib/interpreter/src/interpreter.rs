use std::io;

use parser::{Expr, LiteralValue, Stmt};
use report::ErrorReporter;
use scanner::{Token, TokenData};

mod value;
pub use value::Value;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("[line {}] Error at '{}': {kind}", token.line, token.lexeme)]
pub struct RuntimeError<'t> {
    pub token: &'t Token<'t>,
    pub kind: RuntimeErrorKind,
}

impl<'t> RuntimeError<'t> {
    fn new(token: &'t Token<'t>, kind: RuntimeErrorKind) -> Self {
        Self { token, kind }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Division by zero.")]
    DivisionByZero,
}

/// Where `print` writes to. Every `io::Write` is a sink, so the driver
/// passes stdout and tests collect into a `Vec<u8>`. Write failures do not
/// exist at the language level and are discarded.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);
}

impl<W: io::Write> OutputSink for W {
    fn write_line(&mut self, text: &str) {
        let _ = writeln!(self, "{}", text);
    }
}

pub struct Interpreter<'o> {
    output: &'o mut dyn OutputSink,
}

impl<'o> Interpreter<'o> {
    pub fn new(output: &'o mut dyn OutputSink) -> Self {
        Self { output }
    }

    /// Runs the statements in order. The first runtime error is reported and
    /// returned, nothing after the failing statement executes.
    pub fn run<'t>(
        &mut self,
        statements: &[Stmt<'t>],
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), RuntimeError<'t>> {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                reporter.report_at(error.token.line, error.token.lexeme, &error.kind.to_string());
                return Err(error);
            }
        }
        Ok(())
    }

    fn execute<'t>(&mut self, statement: &Stmt<'t>) -> Result<(), RuntimeError<'t>> {
        log::trace!("Executing: {}", statement);
        match statement {
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.output.write_line(&value.to_string());
            }
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
        }
        Ok(())
    }

    fn evaluate<'t>(&mut self, expr: &Expr<'t>) -> Result<Value, RuntimeError<'t>> {
        use TokenData::*;
        match expr {
            Expr::Literal(LiteralValue::Number(n)) => Ok((*n).into()),
            Expr::Literal(LiteralValue::Str(s)) => Ok((*s).into()),
            Expr::Literal(LiteralValue::Boolean(b)) => Ok((*b).into()),
            Expr::Literal(LiteralValue::Nil) => Ok(Value::Nil),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                match (&operator.data, right) {
                    (Minus, Value::Number(n)) => Ok((-n).into()),
                    (Minus, _) => {
                        Err(RuntimeError::new(*operator, RuntimeErrorKind::OperandMustBeNumber))
                    }
                    (Bang, v) => Ok((!v.is_truthy()).into()),
                    _ => unreachable!("the parser only builds `!` and `-` unary nodes"),
                }
            }

            Expr::Ternary { condition, if_true, if_false } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(if_true)
                } else {
                    self.evaluate(if_false)
                }
            }

            // The left operand runs for its effect only
            Expr::Binary { left, operator, right } if operator.data == Comma => {
                self.evaluate(left)?;
                self.evaluate(right)
            }

            Expr::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                let error = |kind| RuntimeError::new(*operator, kind);
                match (&left, &right, &operator.data) {
                    (Value::Number(l), Value::Number(r), Minus) => Ok((l - r).into()),
                    (Value::Number(l), Value::Number(r), Star) => Ok((l * r).into()),
                    (Value::Number(l), Value::Number(r), Slash) => {
                        if *r != 0.0 {
                            Ok((l / r).into())
                        } else {
                            Err(error(RuntimeErrorKind::DivisionByZero))
                        }
                    }

                    (Value::Number(l), Value::Number(r), Plus) => Ok((l + r).into()),
                    (Value::Str(l), Value::Str(r), Plus) => Ok(format!("{}{}", l, r).into()),
                    // One string operand coerces the other to its display
                    // form
                    (Value::Str(_), _, Plus) | (_, Value::Str(_), Plus) => {
                        Ok(format!("{}{}", left, right).into())
                    }

                    (Value::Number(l), Value::Number(r), Greater) => Ok((l > r).into()),
                    (Value::Number(l), Value::Number(r), GreaterEqual) => Ok((l >= r).into()),
                    (Value::Number(l), Value::Number(r), Less) => Ok((l < r).into()),
                    (Value::Number(l), Value::Number(r), LessEqual) => Ok((l <= r).into()),

                    (_, _, EqualEqual) => Ok((left == right).into()),
                    (_, _, BangEqual) => Ok((left != right).into()),

                    (_, _, Minus | Slash | Star | Greater | GreaterEqual | Less | LessEqual) => {
                        Err(error(RuntimeErrorKind::OperandsMustBeNumbers))
                    }
                    (_, _, Plus) => Err(error(RuntimeErrorKind::OperandsMustBeNumbersOrStrings)),

                    _ => unreachable!("the parser only builds binary operator nodes"),
                }
            }
        }
    }
}
