use super::{Formatter, ToSql};

use braise_core::{stmt::Value, Result};

pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// Position of a parameter; renders as `@<position>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        let position = self.len();
        self.push(value.clone());
        Placeholder(position)
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push('@');
        f.dst.push_str(&self.0.to_string());
        Ok(())
    }
}
