//! Clause-level nodes of a SELECT statement.
//!
//! Nodes hold rendered SQL text. Predicates reach them already translated;
//! raw nodes accept caller-written SQL with or without the leading keyword.

mod columns;
pub use columns::Columns;

mod group_by;
pub use group_by::GroupBy;

mod keyword;
pub(crate) use keyword::strip_keyword;

mod node;
pub use node::Node;

mod order_by;
pub use order_by::OrderBy;

mod raw_sql;
pub use raw_sql::RawSql;

mod select;
pub use select::Select;

mod table_ref;
pub use table_ref::TableRef;

mod where_clause;
pub use where_clause::Where;
