#![allow(unused_variables)]

use super::{Expr, ExprArg, ExprBinaryOp, ExprCall, ExprCast, ExprField, ExprNot, ExprVar, Value};

pub trait Visit {
    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_call(&mut self, i: &ExprCall) {
        visit_expr_call(self, i);
    }

    fn visit_expr_cast(&mut self, i: &ExprCast) {
        visit_expr_cast(self, i);
    }

    fn visit_expr_field(&mut self, i: &ExprField) {
        visit_expr_field(self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        visit_expr_not(self, i);
    }

    fn visit_expr_var(&mut self, i: &ExprVar) {
        visit_expr_var(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        Visit::visit_expr_arg(&mut **self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        Visit::visit_expr_binary_op(&mut **self, i);
    }

    fn visit_expr_call(&mut self, i: &ExprCall) {
        Visit::visit_expr_call(&mut **self, i);
    }

    fn visit_expr_cast(&mut self, i: &ExprCast) {
        Visit::visit_expr_cast(&mut **self, i);
    }

    fn visit_expr_field(&mut self, i: &ExprField) {
        Visit::visit_expr_field(&mut **self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        Visit::visit_expr_not(&mut **self, i);
    }

    fn visit_expr_var(&mut self, i: &ExprVar) {
        Visit::visit_expr_var(&mut **self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        Visit::visit_value(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Call(expr) => v.visit_expr_call(expr),
        Expr::Cast(expr) => v.visit_expr_cast(expr),
        Expr::Field(expr) => v.visit_expr_field(expr),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::Var(expr) => v.visit_expr_var(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_call<V>(v: &mut V, node: &ExprCall)
where
    V: Visit + ?Sized,
{
    if let Some(target) = &node.target {
        v.visit_expr(target);
    }

    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_cast<V>(v: &mut V, node: &ExprCast)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_field<V>(v: &mut V, node: &ExprField)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
}

pub fn visit_expr_not<V>(v: &mut V, node: &ExprNot)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_var<V>(v: &mut V, node: &ExprVar)
where
    V: Visit + ?Sized,
{
    v.visit_value(&node.value);
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}

/// Calls `f` for every expression node in the tree, parents before children.
pub fn for_each_expr<F>(node: &Expr, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            (self.f)(node);
            visit_expr(self, node);
        }
    }

    ForEach { f }.visit_expr(node);
}
