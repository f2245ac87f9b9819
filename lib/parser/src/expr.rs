use std::fmt::{self, Display, Formatter};

use scanner::Token;

#[derive(Debug)]
pub enum Expr<'t> {
    Binary { left: Box<Expr<'t>>, operator: &'t Token<'t>, right: Box<Expr<'t>> },
    Grouping(Box<Expr<'t>>),
    Unary { operator: &'t Token<'t>, right: Box<Expr<'t>> },
    Ternary { condition: Box<Expr<'t>>, if_true: Box<Expr<'t>>, if_false: Box<Expr<'t>> },
    Literal(LiteralValue<'t>),
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operator, left, right)
            }
            Expr::Grouping(expression) => {
                write!(f, "(group {})", expression)
            }
            Expr::Unary { operator, right } => {
                write!(f, "({} {})", operator, right)
            }
            Expr::Ternary { condition, if_true, if_false } => {
                write!(f, "(?: {} {} {})", condition, if_true, if_false)
            }
            Expr::Literal(value) => {
                write!(f, "{}", value)
            }
        }
    }
}

#[derive(Debug)]
pub enum LiteralValue<'t> {
    Number(f64),
    Str(&'t str),
    Boolean(bool),
    Nil,
}

impl<'t> Display for LiteralValue<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LiteralValue::Number(n) => n.to_string(),
                LiteralValue::Str(s) => s.to_string(),
                LiteralValue::Boolean(b) => b.to_string(),
                LiteralValue::Nil => "nil".to_string(),
            }
        )
    }
}
