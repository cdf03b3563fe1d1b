use super::Column;

/// A database table and the columns mapped onto a model type.
///
/// Metadata is resolved ahead of time and consumed read-only.
#[derive(Debug, Clone)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// Mapped columns, in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Finds the column mapped to a model property, ignoring ASCII case.
    pub fn column_by_property(&self, property: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.property.eq_ignore_ascii_case(property))
    }

    /// Finds a column by its database name, ignoring ASCII case.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Primary key columns, ordered by their key position.
    pub fn primary_key(&self) -> Vec<&Column> {
        let mut columns = self
            .columns
            .iter()
            .filter(|column| column.primary_key.is_some())
            .collect::<Vec<_>>();
        columns.sort_by_key(|column| column.primary_key);
        columns
    }
}
