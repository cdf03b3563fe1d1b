use super::{Expr, Value};

/// A captured local variable. Its value is known when the query is built,
/// so it always evaluates locally.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprVar {
    pub name: String,
    pub value: Value,
}

impl Expr {
    pub fn var(name: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprVar {
            name: name.into(),
            value: value.into(),
        }
        .into()
    }
}

impl From<ExprVar> for Expr {
    fn from(value: ExprVar) -> Self {
        Self::Var(value)
    }
}
