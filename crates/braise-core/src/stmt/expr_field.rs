use super::{Expr, Type};

/// Member access, `base.name`, carrying the member's static type.
///
/// When `base` is the predicate argument the member names a mapped property
/// and renders as its column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub base: Box<Expr>,
    pub name: String,
    pub ty: Type,
}

impl Expr {
    pub fn field(base: impl Into<Self>, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        ExprField {
            base: Box::new(base.into()),
            name: name.into(),
            ty: ty.into(),
        }
        .into()
    }

    /// Member access on the predicate argument, e.g. `x.Name`.
    pub fn member(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Expr::field(Expr::arg(0), name, ty)
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

impl ExprField {
    /// Returns true if the member is accessed directly on the predicate
    /// argument.
    pub fn is_arg_member(&self) -> bool {
        self.base.is_arg()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
