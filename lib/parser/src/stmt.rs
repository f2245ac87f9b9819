use std::fmt::{self, Display, Formatter};

use crate::Expr;

#[derive(Debug)]
pub enum Stmt<'t> {
    Expression(Expr<'t>),
    Print(Expr<'t>),
}

impl Display for Stmt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "{}", expr),
            Stmt::Print(expr) => write!(f, "(print {})", expr),
        }
    }
}
