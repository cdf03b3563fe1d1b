#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod dialect;
pub use dialect::Dialect;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
use expr::Predicate;

mod select;
mod translate;

use crate::{ast::Node, ParamSource, Statement};

use braise_core::{Result, Table};

use std::mem;

/// Renders AST nodes and queries to SQL text for one dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    /// The dialect decides how paging is emitted.
    dialect: Dialect,
}

struct Formatter<'a, P> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where the SQL is written
    dst: String,

    /// Where to store parameters
    params: &'a mut P,

    /// Table that member accesses resolve against
    table: Option<&'a Table>,
}

impl Serializer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders a single node.
    ///
    /// SELECT and raw SQL nodes render as complete statements; clause nodes
    /// render as their clause, keyword included.
    pub fn serialize(&self, node: &Node<'_>) -> Result<Statement> {
        let (sql, params) = match node {
            Node::Select(select) => return self.serialize_select(select),
            Node::RawSql(raw) => (format!("SELECT {}", raw.text()), vec![ParamSource::from(raw)]),
            Node::Where(filter) => (
                format!("WHERE {}", filter.text()),
                vec![ParamSource::from(filter)],
            ),
            Node::GroupBy(group_by) => (format!("GROUP BY {}", group_by.text()), vec![]),
            Node::OrderBy(order_by) => (format!("ORDER BY {}", order_by.text()), vec![]),
            Node::Table(table) => (format!("FROM {}", table.text()), vec![]),
        };

        tracing::trace!(sql = %sql, "rendered node");

        Ok(Statement {
            sql,
            params,
            limiter: None,
        })
    }
}

impl<'a, P: Params> Formatter<'a, P> {
    fn new(serializer: &'a Serializer, params: &'a mut P, table: Option<&'a Table>) -> Self {
        Self {
            serializer,
            dst: String::new(),
            params,
            table,
        }
    }

    /// Renders into a separate buffer and returns the text. Parameters are
    /// still recorded.
    fn capture(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<String> {
        let saved = mem::take(&mut self.dst);
        let res = f(self);
        let text = mem::replace(&mut self.dst, saved);
        res.map(|()| text)
    }
}
