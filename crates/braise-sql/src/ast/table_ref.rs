use super::strip_keyword;
use braise_core::Table;

use std::cell::OnceCell;

/// The FROM source of a SELECT.
#[derive(Debug, Clone)]
pub struct TableRef<'a> {
    table: Option<&'a Table>,
    text: OnceCell<String>,
}

impl<'a> TableRef<'a> {
    pub fn from_table(table: &'a Table) -> Self {
        Self {
            table: Some(table),
            text: OnceCell::new(),
        }
    }

    /// Caller-written source. A leading `FROM` is optional.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            table: None,
            text: OnceCell::from(strip_keyword(text.as_ref(), "FROM").to_string()),
        }
    }

    pub fn table(&self) -> Option<&'a Table> {
        self.table
    }

    pub fn text(&self) -> &str {
        self.text
            .get_or_init(|| self.table.map(|table| table.name.clone()).unwrap_or_default())
    }
}
