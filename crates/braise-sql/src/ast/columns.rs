use super::strip_keyword;
use braise_core::Table;

use std::cell::OnceCell;

/// The projected column list of a SELECT.
///
/// Built from table metadata, the text is derived the first time it is
/// read.
#[derive(Debug, Clone)]
pub struct Columns<'a> {
    table: Option<&'a Table>,
    text: OnceCell<String>,
}

impl<'a> Columns<'a> {
    pub fn from_table(table: &'a Table) -> Self {
        Self {
            table: Some(table),
            text: OnceCell::new(),
        }
    }

    /// Caller-written column list. A leading `SELECT` is optional.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            table: None,
            text: OnceCell::from(strip_keyword(text.as_ref(), "SELECT").to_string()),
        }
    }

    pub fn text(&self) -> &str {
        self.text.get_or_init(|| match self.table {
            Some(table) if !table.columns.is_empty() => table
                .columns
                .iter()
                .map(|column| column.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => "*".to_string(),
        })
    }
}
