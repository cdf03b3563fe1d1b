//! Folds the parts of a predicate that do not depend on the row.
//!
//! The first pass walks the tree bottom-up and nominates every node whose
//! whole subtree can be evaluated before translation. A node that cannot be
//! evaluated poisons all of its ancestors, so only maximal independent
//! subtrees are nominated. The second pass walks top-down and replaces each
//! nominated node with the constant it evaluates to.

use braise_core::{
    stmt::{visit, visit_mut, Expr, Visit, VisitMut},
    Result,
};

use std::mem;

/// Folds with the default evaluability rule, [`Expr::is_locally_evaluable`].
pub fn partial_eval(expr: &mut Expr) -> Result<()> {
    partial_eval_with(expr, Expr::is_locally_evaluable)
}

/// Folds every maximal subtree whose nodes all satisfy `can_eval`.
///
/// Subtrees referencing the predicate argument are never folded, whatever
/// `can_eval` returns.
pub fn partial_eval_with(expr: &mut Expr, can_eval: impl Fn(&Expr) -> bool) -> Result<()> {
    let mut nominate = Nominate {
        can_eval,
        independent: true,
        nominated: vec![],
        sizes: vec![],
    };
    nominate.visit_expr(expr);

    let mut rewrite = Rewrite {
        nominated: &nominate.nominated,
        sizes: &nominate.sizes,
        next: 0,
        result: Ok(()),
    };
    rewrite.visit_expr_mut(expr);
    rewrite.result
}

struct Nominate<F> {
    can_eval: F,

    /// Running answer for the subtree being visited
    independent: bool,

    /// Indexed by pre-order node id
    nominated: Vec<bool>,

    /// Number of nodes in the subtree rooted at each id
    sizes: Vec<usize>,
}

impl<F> Visit for Nominate<F>
where
    F: Fn(&Expr) -> bool,
{
    fn visit_expr(&mut self, i: &Expr) {
        let id = self.sizes.len();
        self.sizes.push(0);
        self.nominated.push(false);

        let outer = mem::replace(&mut self.independent, true);
        visit::visit_expr(self, i);

        let independent = self.independent && !i.is_arg() && (self.can_eval)(i);
        self.nominated[id] = independent;
        self.sizes[id] = self.sizes.len() - id;
        self.independent = outer && independent;
    }
}

struct Rewrite<'a> {
    nominated: &'a [bool],
    sizes: &'a [usize],
    next: usize,
    result: Result<()>,
}

impl VisitMut for Rewrite<'_> {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        let id = self.next;

        if !self.nominated[id] {
            self.next += 1;
            visit_mut::visit_expr_mut(self, i);
            return;
        }

        self.next += self.sizes[id];

        if i.is_value() || self.result.is_err() {
            return;
        }

        match i.eval_const() {
            Ok(value) => {
                let ty = i.infer_ty();

                // Keep the static type of a null so the translator can still
                // see that the operand was nullable.
                *i = if value.is_null() && ty.is_option() {
                    Expr::cast(value, ty)
                } else {
                    Expr::Value(value)
                };
            }
            Err(err) => self.result = Err(err),
        }
    }
}
