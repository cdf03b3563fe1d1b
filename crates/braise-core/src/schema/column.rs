use super::Converter;
use crate::stmt::Type;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Column {
    /// Name of the column in the database
    pub name: String,

    /// Name of the model property the column maps to
    pub property: String,

    /// Type of the model property
    pub ty: Type,

    /// Position within the primary key, if the column is part of it
    pub primary_key: Option<usize>,

    /// Converter applied between the database and model representations
    pub converter: Option<Arc<dyn Converter>>,

    /// How the database generates the column's value
    pub generated: Generated,
}

/// Value generation policy of a column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    /// The value is always supplied by the application
    #[default]
    Never,

    /// The database assigns the value on insert
    Identity,

    /// The value is computed by the database
    Computed,
}

impl Column {
    pub fn new(name: impl Into<String>, property: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            property: property.into(),
            ty: ty.into(),
            primary_key: None,
            converter: None,
            generated: Generated::Never,
        }
    }

    pub fn primary_key(mut self, position: usize) -> Self {
        self.primary_key = Some(position);
        self
    }

    pub fn converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    pub fn generated(mut self, generated: Generated) -> Self {
        self.generated = generated;
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key.is_some()
    }

    pub fn is_generated(&self) -> bool {
        self.generated != Generated::Never
    }
}
