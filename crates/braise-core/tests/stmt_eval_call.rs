use braise_core::stmt::{Expr, Value};
use pretty_assertions::assert_eq;

#[test]
fn starts_with() {
    let expr = Expr::call("braise", "StartsWith", vec!["bra".into()]);
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn method_names_ignore_case() {
    let expr = Expr::call("Braise", "toupper", vec![]);
    assert_eq!(expr.eval_const().unwrap(), Value::from("BRAISE"));
}

#[test]
fn replace_and_trim() {
    let expr = Expr::call(
        Expr::call("  a-b  ", "Trim", vec![]),
        "Replace",
        vec!["-".into(), "+".into()],
    );
    assert_eq!(expr.eval_const().unwrap(), Value::from("a+b"));
}

#[test]
fn substring_is_zero_based() {
    let expr = Expr::call("hello", "Substring", vec![1i32.into(), 3i32.into()]);
    assert_eq!(expr.eval_const().unwrap(), Value::from("ell"));

    let expr = Expr::call("hello", "Substring", vec![2i32.into()]);
    assert_eq!(expr.eval_const().unwrap(), Value::from("llo"));
}

#[test]
fn substring_out_of_range_fails() {
    let expr = Expr::call("hi", "Substring", vec![1i32.into(), 5i32.into()]);
    assert!(expr.eval_const().unwrap_err().is_expression_evaluation_failed());
}

#[test]
fn is_null_or_empty() {
    for (input, expected) in [(Value::Null, true), ("".into(), true), ("x".into(), false)] {
        let expr = Expr::call_static("IsNullOrEmpty", vec![input.into()]);
        assert_eq!(expr.eval_const().unwrap(), Value::Bool(expected));
    }
}

#[test]
fn unknown_method_is_unsupported() {
    let err = Expr::call("x", "PadLeft", vec![3i32.into()])
        .eval_const()
        .unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(err.to_string().contains("PadLeft"));
}

#[test]
fn wrong_arity_fails() {
    let expr = Expr::call("x", "Replace", vec!["a".into()]);
    assert!(expr.eval_const().is_err());
}

#[test]
fn captured_variables_evaluate() {
    let expr = Expr::call(Expr::var("prefix", "ab"), "EndsWith", vec!["b".into()]);
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}
