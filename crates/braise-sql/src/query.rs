use braise_core::{stmt::Expr, Table};

/// A query over one table, expressed as a sequence of query operators.
///
/// Predicates and key selectors are expression trees over the row,
/// referenced through [`Expr::arg`] (usually via [`Expr::member`]).
#[derive(Debug, Clone)]
pub struct Query<'a> {
    table: &'a Table,
    ops: Vec<QueryOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOp {
    Where(Expr),
    OrderBy(Expr),
    OrderByDescending(Expr),
    ThenBy(Expr),
    ThenByDescending(Expr),
    Skip(Expr),
    Take(Expr),
    First,
    Count(Option<Expr>),
    Any(Option<Expr>),
    Min(Expr),
    Max(Expr),
    Sum(Expr),
    Average(Expr),
    Select(Expr),
    GroupBy(Expr),
}

impl<'a> Query<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table, ops: vec![] }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn ops(&self) -> &[QueryOp] {
        &self.ops
    }

    pub fn op(mut self, op: QueryOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn filter(self, predicate: impl Into<Expr>) -> Self {
        self.op(QueryOp::Where(predicate.into()))
    }

    pub fn order_by(self, key: impl Into<Expr>) -> Self {
        self.op(QueryOp::OrderBy(key.into()))
    }

    pub fn order_by_desc(self, key: impl Into<Expr>) -> Self {
        self.op(QueryOp::OrderByDescending(key.into()))
    }

    pub fn then_by(self, key: impl Into<Expr>) -> Self {
        self.op(QueryOp::ThenBy(key.into()))
    }

    pub fn then_by_desc(self, key: impl Into<Expr>) -> Self {
        self.op(QueryOp::ThenByDescending(key.into()))
    }

    pub fn skip(self, count: impl Into<Expr>) -> Self {
        self.op(QueryOp::Skip(count.into()))
    }

    pub fn take(self, count: impl Into<Expr>) -> Self {
        self.op(QueryOp::Take(count.into()))
    }

    pub fn first(self) -> Self {
        self.op(QueryOp::First)
    }

    pub fn count(self) -> Self {
        self.op(QueryOp::Count(None))
    }

    pub fn count_where(self, predicate: impl Into<Expr>) -> Self {
        self.op(QueryOp::Count(Some(predicate.into())))
    }

    pub fn any(self) -> Self {
        self.op(QueryOp::Any(None))
    }

    pub fn any_where(self, predicate: impl Into<Expr>) -> Self {
        self.op(QueryOp::Any(Some(predicate.into())))
    }

    pub fn min(self, selector: impl Into<Expr>) -> Self {
        self.op(QueryOp::Min(selector.into()))
    }

    pub fn max(self, selector: impl Into<Expr>) -> Self {
        self.op(QueryOp::Max(selector.into()))
    }

    pub fn sum(self, selector: impl Into<Expr>) -> Self {
        self.op(QueryOp::Sum(selector.into()))
    }

    pub fn average(self, selector: impl Into<Expr>) -> Self {
        self.op(QueryOp::Average(selector.into()))
    }

    pub fn select(self, selector: impl Into<Expr>) -> Self {
        self.op(QueryOp::Select(selector.into()))
    }

    pub fn group_by(self, key: impl Into<Expr>) -> Self {
        self.op(QueryOp::GroupBy(key.into()))
    }
}

impl QueryOp {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Where(_) => "Where",
            Self::OrderBy(_) => "OrderBy",
            Self::OrderByDescending(_) => "OrderByDescending",
            Self::ThenBy(_) => "ThenBy",
            Self::ThenByDescending(_) => "ThenByDescending",
            Self::Skip(_) => "Skip",
            Self::Take(_) => "Take",
            Self::First => "First",
            Self::Count(_) => "Count",
            Self::Any(_) => "Any",
            Self::Min(_) => "Min",
            Self::Max(_) => "Max",
            Self::Sum(_) => "Sum",
            Self::Average(_) => "Average",
            Self::Select(_) => "Select",
            Self::GroupBy(_) => "GroupBy",
        }
    }
}
