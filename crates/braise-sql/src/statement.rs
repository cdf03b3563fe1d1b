use crate::{binder, RawSql, Where};
use braise_core::{stmt::Value, Command};

/// Rendered SQL ready to be executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Final SQL text
    pub sql: String,

    /// Parameter values grouped by the node that produced them
    pub params: Vec<ParamSource>,

    /// Rows to skip and take on the reader side, for dialects without a
    /// native offset
    pub limiter: Option<RowLimiter>,
}

/// The SQL text of one node and the values of its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSource {
    pub text: String,
    pub values: Vec<Value>,
}

/// Reader-side paging applied after the query returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowLimiter {
    pub skip: usize,
    pub take: Option<usize>,
}

impl Statement {
    /// Sets the command text and binds every placeholder it references.
    pub fn bind(&self, command: &mut impl Command) {
        command.set_text(&self.sql);
        binder::bind(&self.sql, &self.params, command);
    }

    /// All parameter values in node order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.params.iter().flat_map(|source| source.values.iter())
    }
}

impl RowLimiter {
    /// Returns true if the row at `index` (zero-based, before limiting)
    /// survives the limiter.
    pub fn admits(&self, index: usize) -> bool {
        index >= self.skip && self.take.map_or(true, |take| index - self.skip < take)
    }

    /// Returns true once no later row can be admitted.
    pub fn is_exhausted(&self, index: usize) -> bool {
        self.take
            .is_some_and(|take| index >= self.skip.saturating_add(take))
    }
}

impl From<&Where> for ParamSource {
    fn from(value: &Where) -> Self {
        Self {
            text: value.text().to_string(),
            values: value.params().to_vec(),
        }
    }
}

impl From<&RawSql> for ParamSource {
    fn from(value: &RawSql) -> Self {
        Self {
            text: value.text().to_string(),
            values: value.params().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_window() {
        let limiter = RowLimiter {
            skip: 2,
            take: Some(3),
        };

        let admitted = (0..8).filter(|&i| limiter.admits(i)).collect::<Vec<_>>();
        assert_eq!(admitted, [2, 3, 4]);
        assert!(!limiter.is_exhausted(4));
        assert!(limiter.is_exhausted(5));
    }

    #[test]
    fn limiter_without_take() {
        let limiter = RowLimiter { skip: 1, take: None };
        assert!(!limiter.admits(0));
        assert!(limiter.admits(100));
        assert!(!limiter.is_exhausted(usize::MAX));
    }
}
