pub mod ast;
pub use ast::{Columns, GroupBy, Node, OrderBy, RawSql, Select, TableRef, Where};

pub mod binder;

pub mod partial_eval;
pub use partial_eval::{partial_eval, partial_eval_with};

pub mod query;
pub use query::{Query, QueryOp};

pub mod serializer;
pub use serializer::{Dialect, Serializer};

mod statement;
pub use statement::{ParamSource, RowLimiter, Statement};
