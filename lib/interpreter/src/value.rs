/// A runtime value. `PartialEq` is the language's `==`: structural, `nil`
/// only equals `nil`, values of different types compare unequal.
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::Display)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    #[display(fmt = "nil")]
    Nil,
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
