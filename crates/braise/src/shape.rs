//! Cache keys for compiled factories.
//!
//! A factory depends on the destination type and on the names and native
//! types of the row's columns, in order. The key hashes that descriptor to a
//! 64-bit xxh3 fingerprint but keeps the descriptor itself, so two shapes
//! whose fingerprints collide still compare unequal.

use braise_core::Row;

use std::{
    any::{self, TypeId},
    hash::{Hash, Hasher},
};
use xxhash_rust::xxh3::Xxh3;

/// What a factory produces from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryKind {
    /// A populated model instance
    Model,

    /// The first column as a primitive value
    Scalar,
}

#[derive(Debug, Clone)]
pub struct ShapeKey {
    kind: FactoryKind,
    type_id: TypeId,
    type_name: &'static str,

    /// `(column name, native type name)` by ordinal
    columns: Vec<(String, String)>,

    fingerprint: u64,
}

impl ShapeKey {
    /// Describes the shape of `row` as read into `T`.
    pub fn new<T: 'static>(kind: FactoryKind, row: &dyn Row) -> Self {
        let type_name = any::type_name::<T>();
        let columns = (0..row.field_count())
            .map(|ordinal| {
                (
                    row.field_name(ordinal).to_string(),
                    row.field_type_name(ordinal).to_string(),
                )
            })
            .collect::<Vec<_>>();

        let mut hasher = Xxh3::new();
        hasher.update(type_name.as_bytes());
        for (name, type_name) in &columns {
            hasher.update(name.as_bytes());
            hasher.update(type_name.as_bytes());
        }

        Self {
            kind,
            type_id: TypeId::of::<T>(),
            type_name,
            columns,
            fingerprint: hasher.digest(),
        }
    }

    pub fn kind(&self) -> FactoryKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl PartialEq for ShapeKey {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.kind == other.kind
            && self.type_id == other.type_id
            && self.columns == other.columns
    }
}

impl Eq for ShapeKey {}

impl Hash for ShapeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint);
    }
}
