use super::{ExprArg, ExprBinaryOp, ExprCall, ExprCast, ExprField, ExprNot, ExprVar, Type, Value};

/// A predicate expression.
///
/// Callers build these trees directly; the translator renders them to SQL and
/// the partial evaluator folds the parts that do not depend on the row.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The predicate parameter (the row being filtered)
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Method call
    Call(ExprCall),

    /// Type conversion
    Cast(ExprCast),

    /// Member access
    Field(ExprField),

    /// Boolean negation
    Not(ExprNot),

    /// Captured local variable
    Var(ExprVar),

    /// Constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the expression references the predicate argument
    /// anywhere in its tree.
    pub fn references_arg(&self) -> bool {
        match self {
            Self::Arg(_) => true,
            Self::BinaryOp(expr) => expr.lhs.references_arg() || expr.rhs.references_arg(),
            Self::Call(expr) => {
                expr.target.as_deref().is_some_and(Expr::references_arg)
                    || expr.args.iter().any(Expr::references_arg)
            }
            Self::Cast(expr) => expr.expr.references_arg(),
            Self::Field(expr) => expr.base.references_arg(),
            Self::Not(expr) => expr.expr.references_arg(),
            Self::Var(_) | Self::Value(_) => false,
        }
    }

    /// Infers the static type of the expression.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Arg(_) => Type::Unknown,
            Self::BinaryOp(expr) if expr.op.is_comparison() || expr.op.is_logical() => Type::Bool,
            Self::BinaryOp(expr) => match (expr.lhs.infer_ty(), expr.rhs.infer_ty()) {
                (lhs, rhs) if lhs.is_string() || rhs.is_string() => Type::String,
                (Type::Unknown, rhs) => rhs,
                (lhs, _) => lhs,
            },
            Self::Call(expr) => match expr.resolve() {
                Some(method) if method.is_predicate() => Type::Bool,
                Some(_) => Type::String,
                None => Type::Unknown,
            },
            Self::Cast(expr) => expr.ty.clone(),
            Self::Field(expr) => expr.ty.clone(),
            Self::Not(_) => Type::Bool,
            Self::Var(expr) => expr.value.ty(),
            Self::Value(value) => value.ty(),
        }
    }

    /// Default answer to "may this node be evaluated before translation?".
    ///
    /// Member access is left to the translator, as are calls to methods
    /// outside the supported table.
    pub fn is_locally_evaluable(&self) -> bool {
        match self {
            Self::Arg(_) | Self::Field(_) => false,
            Self::Call(expr) => expr.resolve().is_some(),
            _ => true,
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_expr_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_expr_from_value!(
    bool,
    i16,
    i32,
    i64,
    f64,
    String,
    &str,
    uuid::Uuid,
    chrono::NaiveDate,
    chrono::NaiveDateTime
);
