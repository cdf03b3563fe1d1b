use super::{Formatter, Predicate, Serializer, ToSql};
use crate::{
    ast::{Columns, OrderBy, Select, TableRef, Where},
    partial_eval, Query, QueryOp, Statement,
};

use braise_core::{
    stmt::{Expr, Value},
    Error, Result, Table,
};

impl Serializer {
    /// Translates a query into a single SQL statement.
    ///
    /// Predicates are partially evaluated, then rendered with every constant
    /// as a placeholder (`@0`, `@1`, ...) numbered across the whole query.
    /// Skip and Take counts must reduce to integer constants; they are
    /// rendered inline.
    pub fn translate(&self, query: &Query<'_>) -> Result<Statement> {
        let mut translation = Translation {
            serializer: self,
            table: query.table(),
            params: vec![],
            filter: None,
            order_by: vec![],
            skip: None,
            take: None,
            projection: Projection::Columns,
        };

        for op in query.ops() {
            translation.apply(op)?;
        }

        translation.finish()
    }
}

struct Translation<'a> {
    serializer: &'a Serializer,
    table: &'a Table,

    /// Every placeholder value rendered so far
    params: Vec<Value>,

    filter: Option<Where>,

    /// `column [DESC]` fragments, first declared first
    order_by: Vec<String>,

    skip: Option<usize>,
    take: Option<usize>,
    projection: Projection,
}

enum Projection {
    Columns,
    Count,
    Any,
    Aggregate {
        operator: &'static str,
        sql: String,
    },
}

impl Projection {
    /// Name of the terminal operator that produced the projection.
    fn operator(&self) -> Option<&'static str> {
        match self {
            Self::Columns => None,
            Self::Count => Some("Count"),
            Self::Any => Some("Any"),
            Self::Aggregate { operator, .. } => Some(*operator),
        }
    }
}

impl Translation<'_> {
    fn apply(&mut self, op: &QueryOp) -> Result<()> {
        if let Some(terminal) = self.projection.operator() {
            return Err(Error::unsupported_operation(format!(
                "{} after {terminal}",
                op.name()
            )));
        }

        match op {
            QueryOp::Where(predicate) => self.filter(predicate)?,
            QueryOp::OrderBy(key)
            | QueryOp::OrderByDescending(key)
            | QueryOp::ThenBy(key)
            | QueryOp::ThenByDescending(key) => {
                let then = matches!(op, QueryOp::ThenBy(_) | QueryOp::ThenByDescending(_));
                if then && self.order_by.is_empty() {
                    return Err(Error::invalid_query(format!(
                        "{} without a preceding OrderBy",
                        op.name()
                    )));
                }

                let mut fragment = self.key(key, op)?;
                if matches!(op, QueryOp::OrderByDescending(_) | QueryOp::ThenByDescending(_)) {
                    fragment.push_str(" DESC");
                }
                self.order_by.push(fragment);
            }
            QueryOp::Skip(count) => {
                let count = self
                    .literal_count(count)
                    .map_err(|err| err.context(Error::unsupported_operation("Skip")))?;

                if self.take.is_some() {
                    return Err(Error::unsupported_operation("Skip after Take"));
                }

                self.skip = Some(self.skip.unwrap_or(0).saturating_add(count));
            }
            QueryOp::Take(count) => {
                let count = self
                    .literal_count(count)
                    .map_err(|err| err.context(Error::unsupported_operation("Take")))?;
                self.limit(count);
            }
            QueryOp::First => self.limit(1),
            QueryOp::Count(predicate) => {
                if let Some(predicate) = predicate {
                    self.filter(predicate)?;
                }
                self.projection = Projection::Count;
            }
            QueryOp::Any(predicate) => {
                if let Some(predicate) = predicate {
                    self.filter(predicate)?;
                }
                self.projection = Projection::Any;
            }
            QueryOp::Min(selector) => self.aggregate(op, "MIN", selector)?,
            QueryOp::Max(selector) => self.aggregate(op, "MAX", selector)?,
            QueryOp::Sum(selector) => self.aggregate(op, "SUM", selector)?,
            QueryOp::Average(selector) => self.aggregate(op, "AVG", selector)?,
            QueryOp::Select(_) | QueryOp::GroupBy(_) => {
                return Err(Error::unsupported_operation(format!(
                    "{} after the initial projection",
                    op.name()
                )))
            }
        }

        Ok(())
    }

    /// Renders a predicate and ANDs it into the WHERE clause.
    fn filter(&mut self, predicate: &Expr) -> Result<()> {
        let mut predicate = predicate.clone();
        partial_eval(&mut predicate)?;

        let start = self.params.len();
        let mut f = Formatter::new(self.serializer, &mut self.params, Some(self.table));
        Predicate(&predicate).to_sql(&mut f)?;
        let text = f.dst;

        let clause = Where::with_params(text, self.params[start..].to_vec());
        self.filter = Some(match self.filter.take() {
            Some(filter) => filter.and(clause),
            None => clause,
        });

        Ok(())
    }

    /// Renders an ordering or aggregate key. Keys may not bind parameters.
    fn key(&self, key: &Expr, op: &QueryOp) -> Result<String> {
        let mut key = key.clone();
        partial_eval(&mut key)?;

        let mut scratch = Vec::<Value>::new();
        let mut f = Formatter::new(self.serializer, &mut scratch, Some(self.table));
        key.to_sql(&mut f)?;
        let text = f.dst;

        if !scratch.is_empty() {
            return Err(Error::unsupported_operation(format!(
                "{} over a constant expression",
                op.name()
            )));
        }

        Ok(text)
    }

    /// Resolves a Skip/Take count through the parameter machinery and reads
    /// the integer back. The rendered text is discarded.
    fn literal_count(&self, count: &Expr) -> Result<usize> {
        let mut count = count.clone();
        partial_eval(&mut count)?;

        let mut scratch = Vec::<Value>::new();
        let mut f = Formatter::new(self.serializer, &mut scratch, Some(self.table));
        count.to_sql(&mut f)?;

        match scratch.as_slice() {
            [value] => value.to_usize(),
            _ => Err(Error::invalid_query("count must be an integer constant")),
        }
    }

    fn limit(&mut self, count: usize) {
        self.take = Some(self.take.map_or(count, |take| take.min(count)));
    }

    fn aggregate(&mut self, op: &QueryOp, func: &str, selector: &Expr) -> Result<()> {
        let column = self.key(selector, op)?;
        self.projection = Projection::Aggregate {
            operator: op.name(),
            sql: format!("{func}({column})"),
        };
        Ok(())
    }

    fn finish(self) -> Result<Statement> {
        let operator = self.projection.operator();
        let paged = self.skip.is_some() || self.take.is_some();

        // Without Skip every dialect renders Take as `TOP n`, which limits
        // the result rows rather than the rows aggregated.
        if let (Projection::Count | Projection::Aggregate { .. }, None, Some(_)) =
            (&self.projection, self.skip, self.take)
        {
            return Err(Error::unsupported_operation(format!(
                "{} with Take and no Skip",
                operator.unwrap_or("aggregate")
            )));
        }

        let columns = match &self.projection {
            Projection::Columns => Columns::from_table(self.table),
            Projection::Count => Columns::raw("COUNT(*)"),
            Projection::Any => Columns::raw("''"),
            Projection::Aggregate { sql, .. } => Columns::raw(sql),
        };

        let mut select = Select::new(columns, TableRef::from_table(self.table));

        if let Some(filter) = self.filter {
            select = select.filter(filter)?;
        }

        // Aggregates only keep the ordering when paging depends on it.
        if !self.order_by.is_empty() && (operator.is_none() || paged) {
            select = select.order_by(OrderBy::from_fragments(&self.order_by))?;
        }

        if let Some(skip) = self.skip {
            select = select.skip(skip)?;
        }

        if let Some(take) = self.take {
            select = select.take(take)?;
        }

        let mut statement = self.serializer.serialize_select(&select)?;

        if let Some(operator) = operator {
            if statement.limiter.is_some() {
                return Err(Error::unsupported_operation(format!(
                    "{operator} with Skip on the {} dialect",
                    self.serializer.dialect()
                )));
            }
        }

        if matches!(self.projection, Projection::Any) {
            statement.sql = format!("SELECT (CASE WHEN EXISTS({}) THEN 1 ELSE 0 END)", statement.sql);
        }

        tracing::trace!(sql = %statement.sql, params = self.params.len(), "translated query");

        Ok(statement)
    }
}
