mod cache;

mod factory;

mod materializer;
pub use materializer::{Materialize, Materializer};

pub mod model;
pub use model::{Constructor, Model, ModelSchema};

mod scalar;
pub use scalar::Scalar;

pub mod shape;
pub use shape::{FactoryKind, ShapeKey};

pub use braise_core::{
    bail, driver, err, schema, stmt, Column, Command, Cursor, Error, Result, Row, Table,
};

pub use braise_sql::{self as sql, Dialect, Query, Serializer, Statement};
