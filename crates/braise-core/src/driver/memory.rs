use super::{Command, Cursor, Row};
use crate::{
    stmt::{Type, Value},
    Result,
};

use indexmap::IndexMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// A result set held in memory.
#[derive(Debug, Default)]
pub struct MemoryCursor {
    columns: Vec<MemoryColumn>,
    rows: Vec<Vec<Value>>,

    /// Index of the current row, `None` before the first `advance`.
    position: Option<usize>,

    /// Row index at which `advance` reports an error instead.
    fail_at: Option<usize>,

    closed: bool,
    releases: Arc<AtomicUsize>,
}

#[derive(Debug, Clone)]
pub struct MemoryColumn {
    pub name: String,
    pub type_name: String,
    pub ty: Type,
}

impl MemoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        ty: impl Into<Type>,
    ) -> Self {
        self.columns.push(MemoryColumn {
            name: name.into(),
            type_name: type_name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Appends a row. Missing trailing values read as null.
    pub fn row(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Makes `advance` fail when it would move onto row `index`.
    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn columns(&self) -> &[MemoryColumn] {
        &self.columns
    }

    /// Shared counter of how many times the cursor released its rows.
    pub fn releases(&self) -> Arc<AtomicUsize> {
        self.releases.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn current(&self) -> Result<&[Value]> {
        match self.position {
            Some(position) if !self.closed => self
                .rows
                .get(position)
                .map(Vec::as_slice)
                .ok_or_else(|| err!("cursor is exhausted")),
            _ if self.closed => Err(err!("cursor is closed")),
            _ => Err(err!("cursor is not positioned on a row")),
        }
    }
}

impl Row for MemoryCursor {
    fn field_count(&self) -> usize {
        self.columns.len()
    }

    fn field_name(&self, ordinal: usize) -> &str {
        &self.columns[ordinal].name
    }

    fn field_type_name(&self, ordinal: usize) -> &str {
        &self.columns[ordinal].type_name
    }

    fn field_type(&self, ordinal: usize) -> Type {
        self.columns[ordinal].ty.clone()
    }

    fn get_value(&self, ordinal: usize) -> Result<Value> {
        if ordinal >= self.columns.len() {
            bail!("field ordinal {ordinal} out of range");
        }

        Ok(self.current()?.get(ordinal).cloned().unwrap_or_default())
    }
}

impl Cursor for MemoryCursor {
    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Ok(false);
        }

        let next = self.position.map_or(0, |position| position + 1);

        if self.fail_at == Some(next) {
            bail!("failed to read row {next}");
        }

        self.position = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// A command object that records its text and parameters.
#[derive(Debug, Default, Clone)]
pub struct MemoryCommand {
    text: String,
    params: IndexMap<String, Value>,
}

impl MemoryCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

impl Command for MemoryCommand {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn add_parameter(&mut self, name: &str, value: Value) {
        self.params.insert(name.to_string(), value);
    }

    fn parameters(&self) -> Vec<(&str, &Value)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }
}
