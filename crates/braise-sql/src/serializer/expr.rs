use super::{Comma, Formatter, Params, ToSql};

use braise_core::{
    stmt::{Expr, ExprBinaryOp, ExprCall, ExprField, Method, Type, Value},
    Error, Result,
};

/// Length passed to `SUBSTRING` when the caller omits one.
const SUBSTRING_DEFAULT_LENGTH: i64 = i32::MAX as i64;

/// Renders an expression in boolean position, where bare boolean operands
/// are compared against `1`.
pub(super) struct Predicate<'a>(pub(super) &'a Expr);

/// Renders integer constants inline; anything else renders as usual.
struct Inline<'a>(&'a Expr);

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Expr::Arg(_) => Err(Error::unsupported_operation(
                "the query parameter used as a value",
            )),
            Expr::BinaryOp(expr) => expr.to_sql(f),
            Expr::Call(expr) => expr.to_sql(f),
            Expr::Cast(expr) => expr.expr.to_sql(f),
            Expr::Field(expr) => expr.to_sql(f),
            Expr::Not(expr) => {
                fmt!(f, "NOT " Predicate(&expr.expr));
                Ok(())
            }
            Expr::Var(expr) => expr.value.to_sql(f),
            Expr::Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.is_null() {
            fmt!(f, "NULL");
        } else {
            let placeholder = f.params.push(self);
            fmt!(f, placeholder);
        }
        Ok(())
    }
}

impl ToSql for &ExprField {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !self.is_arg_member() {
            return Err(Error::unsupported_operation(format!(
                "member `{}` of a computed value",
                self.name
            )));
        }

        let column = f
            .table
            .and_then(|table| {
                table
                    .column_by_property(&self.name)
                    .or_else(|| table.column_by_name(&self.name))
            })
            .ok_or_else(|| {
                Error::unsupported_operation(format!("member `{}` has no mapped column", self.name))
            })?;

        fmt!(f, column.name.as_str());
        Ok(())
    }
}

impl ToSql for &ExprBinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let op = self.op;

        // Comparisons against null use IS / IS NOT.
        if op.is_eq() || op.is_ne() {
            let operand = if is_null_literal(&self.rhs) {
                Some(&self.lhs)
            } else if is_null_literal(&self.lhs) {
                Some(&self.rhs)
            } else {
                None
            };

            if let Some(operand) = operand {
                let suffix = if op.is_eq() { " IS NULL)" } else { " IS NOT NULL)" };
                fmt!(f, "(" operand suffix);
                return Ok(());
            }
        }

        if op.is_logical() {
            fmt!(f, "(" Predicate(&self.lhs) " " op.as_sql() " " Predicate(&self.rhs) ")");
        } else {
            fmt!(f, "(" self.lhs " " op.as_sql() " " self.rhs ")");
        }

        Ok(())
    }
}

impl ToSql for &ExprCall {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let Some(method) = self.resolve() else {
            return Err(Error::unsupported_operation(format!(
                "method `{}`",
                self.method
            )));
        };

        if !method.arity().contains(&self.args.len()) {
            return Err(Error::invalid_query(format!(
                "`{method}` called with {} arguments",
                self.args.len()
            )));
        }

        let args = &self.args;
        let arg = move |index: usize| &args[index];
        let target = move || {
            self.target
                .as_deref()
                .ok_or_else(|| Error::invalid_query(format!("`{method}` requires a target")))
        };

        match method {
            Method::IsNullOrEmpty => {
                // The subject appears twice but its parameters are recorded once.
                let subject = f.capture(|f| {
                    fmt!(f, arg(0));
                    Ok(())
                })?;
                let subject = subject.as_str();
                fmt!(f, "(" subject " IS NULL OR " subject " = '')");
            }
            Method::StartsWith => fmt!(f, "(" target()? " LIKE " arg(0) " + '%')"),
            Method::EndsWith => fmt!(f, "(" target()? " LIKE '%' + " arg(0) ")"),
            Method::Contains => fmt!(f, "(" target()? " LIKE '%' + " arg(0) " + '%')"),
            Method::ToUpper => fmt!(f, "UPPER(" target()? ")"),
            Method::ToLower => fmt!(f, "LOWER(" target()? ")"),
            Method::Replace => fmt!(f, "REPLACE(" Comma([target()?, arg(0), arg(1)]) ")"),
            Method::Trim => fmt!(f, "RTRIM(LTRIM(" target()? "))"),
            Method::Substring => {
                // Source indices are zero-based, SQL's are one-based.
                fmt!(f, "SUBSTRING(" target()? ", " Inline(arg(0)) " + 1, ");
                match args.get(1) {
                    Some(length) => fmt!(f, Inline(length)),
                    None => fmt!(f, SUBSTRING_DEFAULT_LENGTH),
                }
                fmt!(f, ")");
            }
        }

        Ok(())
    }
}

impl ToSql for Predicate<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let boolean = match self.0 {
            Expr::Field(expr) => *expr.ty.non_optional() == Type::Bool,
            Expr::Var(expr) => matches!(expr.value, Value::Bool(_)),
            Expr::Value(value) => matches!(value, Value::Bool(_)),
            _ => false,
        };

        if boolean {
            fmt!(f, "(" self.0 " = 1)");
        } else {
            fmt!(f, self.0);
        }

        Ok(())
    }
}

impl ToSql for Inline<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Expr::Value(value @ (Value::I16(_) | Value::I32(_) | Value::I64(_))) => {
                match value.as_i64() {
                    Some(value) => fmt!(f, value),
                    None => fmt!(f, self.0),
                }
            }
            expr => fmt!(f, expr),
        }

        Ok(())
    }
}

/// A null constant, possibly wrapped in casts.
fn is_null_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Value(value) => value.is_null(),
        Expr::Var(expr) => expr.value.is_null(),
        Expr::Cast(expr) => is_null_literal(&expr.expr),
        _ => false,
    }
}
