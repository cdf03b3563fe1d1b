use super::{Expr, Method};

/// A method call, `target.method(args...)`, or a static call when `target`
/// is `None` (e.g. `IsNullOrEmpty(x)`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub target: Option<Box<Expr>>,
    pub method: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn call(target: impl Into<Self>, method: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprCall {
            target: Some(Box::new(target.into())),
            method: method.into(),
            args,
        }
        .into()
    }

    pub fn call_static(method: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprCall {
            target: None,
            method: method.into(),
            args,
        }
        .into()
    }
}

impl ExprCall {
    /// Resolves the method name against the supported method table.
    pub fn resolve(&self) -> Option<Method> {
        Method::from_name(&self.method)
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
