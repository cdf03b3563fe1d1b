use super::Expr;

/// Reference to a parameter of the predicate, i.e. the row being filtered.
///
/// Predicates take a single parameter, so `position` is `0` for every
/// argument built through [`Expr::arg`]. Any subtree containing an argument
/// cannot be evaluated locally.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ExprArg {
    pub position: usize,
}

impl Expr {
    pub fn arg(position: usize) -> Self {
        ExprArg { position }.into()
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
