use super::{BinaryOp, Expr, ExprBinaryOp, ExprCall, Method, Type, Value};
use crate::{Error, Result};

impl Expr {
    /// Evaluates an expression that does not depend on the predicate
    /// argument.
    pub fn eval_const(&self) -> Result<Value> {
        match self {
            Expr::Value(value) => Ok(value.clone()),
            Expr::Var(var) => Ok(var.value.clone()),
            Expr::Arg(_) => Err(Error::expression_evaluation_failed(
                "expression references the predicate argument",
            )),
            Expr::Field(field) => Err(Error::expression_evaluation_failed(format!(
                "member `{}` cannot be evaluated locally",
                field.name
            ))),
            Expr::Cast(expr) => expr.expr.eval_const()?.cast(&expr.ty),
            Expr::Not(expr) => match expr.expr.eval_const()? {
                Value::Bool(value) => Ok(Value::Bool(!value)),
                Value::Null => Ok(Value::Null),
                value => Err(Error::expression_evaluation_failed(format!(
                    "cannot negate a value of type {}",
                    value.ty()
                ))),
            },
            Expr::BinaryOp(expr) => eval_binary_op(expr),
            Expr::Call(expr) => eval_call(expr),
        }
    }
}

fn eval_binary_op(expr: &ExprBinaryOp) -> Result<Value> {
    let lhs = expr.lhs.eval_const()?;
    let rhs = expr.rhs.eval_const()?;

    match expr.op {
        BinaryOp::Eq => Ok(Value::Bool(lhs.loose_eq(&rhs))),
        BinaryOp::Ne => Ok(Value::Bool(!lhs.loose_eq(&rhs))),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            // Comparisons involving null are false.
            let Some(ordering) = lhs.compare(&rhs) else {
                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Bool(false));
                }
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot compare {} with {}",
                    lhs.ty(),
                    rhs.ty()
                )));
            };

            Ok(Value::Bool(match expr.op {
                BinaryOp::Lt => ordering.is_lt(),
                BinaryOp::Le => ordering.is_le(),
                BinaryOp::Gt => ordering.is_gt(),
                _ => ordering.is_ge(),
            }))
        }
        BinaryOp::And | BinaryOp::Or => match (lhs.as_bool(), rhs.as_bool()) {
            (Some(lhs), Some(rhs)) if expr.op == BinaryOp::And => Ok(Value::Bool(lhs && rhs)),
            (Some(lhs), Some(rhs)) => Ok(Value::Bool(lhs || rhs)),
            _ => Err(Error::expression_evaluation_failed(format!(
                "logical {:?} requires boolean operands",
                expr.op
            ))),
        },
        op => eval_arithmetic(op, lhs, rhs),
    }
}

fn eval_arithmetic(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
    if lhs.is_null() || rhs.is_null() {
        return Ok(Value::Null);
    }

    // `+` on a string concatenates, as the host language does.
    if op == BinaryOp::Add && (lhs.as_str().is_some() || rhs.as_str().is_some()) {
        let lhs = lhs.cast(&Type::String)?;
        let rhs = rhs.cast(&Type::String)?;
        let (Value::String(mut lhs), Value::String(rhs)) = (lhs, rhs) else {
            return Err(Error::expression_evaluation_failed("string concatenation"));
        };
        lhs.push_str(&rhs);
        return Ok(Value::String(lhs));
    }

    if matches!(lhs, Value::F64(_)) || matches!(rhs, Value::F64(_)) {
        let (Some(a), Some(b)) = (lhs.as_f64(), rhs.as_f64()) else {
            return Err(arithmetic_error(op, &lhs, &rhs));
        };

        return Ok(Value::F64(match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            _ => a % b,
        }));
    }

    let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) else {
        return Err(arithmetic_error(op, &lhs, &rhs));
    };

    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        _ => a.checked_rem(b),
    }
    .ok_or_else(|| {
        Error::expression_evaluation_failed(format!("integer overflow or division by zero in `{op}`"))
    })?;

    // The result takes the wider of the two operand types.
    let ty = match (&lhs, &rhs) {
        (Value::I64(_), _) | (_, Value::I64(_)) => Type::I64,
        (Value::I32(_), _) | (_, Value::I32(_)) => Type::I32,
        _ => Type::I16,
    };

    Value::I64(result).cast(&ty)
}

fn arithmetic_error(op: BinaryOp, lhs: &Value, rhs: &Value) -> Error {
    Error::expression_evaluation_failed(format!(
        "cannot apply `{op}` to {} and {}",
        lhs.ty(),
        rhs.ty()
    ))
}

fn eval_call(expr: &ExprCall) -> Result<Value> {
    let Some(method) = expr.resolve() else {
        return Err(Error::unsupported_operation(format!(
            "method `{}`",
            expr.method
        )));
    };

    if !method.arity().contains(&expr.args.len()) {
        return Err(Error::expression_evaluation_failed(format!(
            "`{method}` called with {} arguments",
            expr.args.len()
        )));
    }

    let args = expr
        .args
        .iter()
        .map(Expr::eval_const)
        .collect::<Result<Vec<_>>>()?;

    if method.is_static() {
        return match method {
            Method::IsNullOrEmpty => Ok(Value::Bool(match &args[0] {
                Value::Null => true,
                Value::String(value) => value.is_empty(),
                value => {
                    return Err(Error::expression_evaluation_failed(format!(
                        "`{method}` expects a string, found {}",
                        value.ty()
                    )))
                }
            })),
            _ => unreachable!("only IsNullOrEmpty is static"),
        };
    }

    let Some(target) = &expr.target else {
        return Err(Error::expression_evaluation_failed(format!(
            "`{method}` requires a target"
        )));
    };

    let target = match target.eval_const()? {
        Value::String(target) => target,
        Value::Null => {
            return Err(Error::expression_evaluation_failed(format!(
                "`{method}` called on a null string"
            )))
        }
        value => {
            return Err(Error::expression_evaluation_failed(format!(
                "`{method}` expects a string target, found {}",
                value.ty()
            )))
        }
    };

    let arg = |index: usize| string_arg(&args, index, method);

    Ok(match method {
        Method::StartsWith => Value::Bool(target.starts_with(arg(0)?)),
        Method::EndsWith => Value::Bool(target.ends_with(arg(0)?)),
        Method::Contains => Value::Bool(target.contains(arg(0)?)),
        Method::ToUpper => Value::String(target.to_uppercase()),
        Method::ToLower => Value::String(target.to_lowercase()),
        Method::Trim => Value::String(target.trim().to_string()),
        Method::Replace => Value::String(target.replace(arg(0)?, arg(1)?)),
        Method::Substring => {
            let chars = target.chars().collect::<Vec<_>>();
            let start = args[0].to_usize()?;
            let len = match args.get(1) {
                Some(len) => len.to_usize()?,
                None => chars.len().saturating_sub(start),
            };

            let Some(slice) = start
                .checked_add(len)
                .and_then(|end| chars.get(start..end))
            else {
                return Err(Error::expression_evaluation_failed(format!(
                    "`Substring({start}, {len})` is out of range for a string of length {}",
                    chars.len()
                )));
            };

            Value::String(slice.iter().collect())
        }
        Method::IsNullOrEmpty => unreachable!("static methods are handled above"),
    })
}

fn string_arg(args: &[Value], index: usize, method: Method) -> Result<&str> {
    args[index].as_str().ok_or_else(|| {
        Error::expression_evaluation_failed(format!(
            "argument {index} of `{method}` must be a string"
        ))
    })
}
