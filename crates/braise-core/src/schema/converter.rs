use crate::{
    stmt::{Type, TypeEnum, Value},
    Error, Result,
};

use std::fmt;

/// Bidirectional transform between the database and model representation
/// of a value.
///
/// Converters hold no per-row state and are shared by every factory that
/// uses them.
pub trait Converter: Send + Sync + fmt::Debug {
    /// Converts a value read from the database into the model representation.
    fn from_db(&self, value: Value) -> Result<Value>;

    /// Converts a model value into the representation stored in the database.
    fn to_db(&self, value: Value) -> Result<Value>;
}

/// Maps integer columns onto an enumerated type.
#[derive(Debug, Clone)]
pub struct EnumConverter {
    pub ty: TypeEnum,
}

impl EnumConverter {
    pub fn new(ty: TypeEnum) -> Self {
        Self { ty }
    }
}

impl Converter for EnumConverter {
    fn from_db(&self, value: Value) -> Result<Value> {
        value.cast(&Type::Enum(self.ty.clone()))
    }

    fn to_db(&self, value: Value) -> Result<Value> {
        match value {
            Value::Enum(value) => Ok(Value::I64(value.discriminant)),
            Value::Null => Ok(Value::Null),
            Value::String(name) => match self.ty.by_name(&name) {
                Some(variant) => Ok(Value::I64(variant.discriminant)),
                None => Err(Error::conversion_failure(format!(
                    "`{name}` is not a variant of {}",
                    self.ty.name
                ))),
            },
            value => value.cast(&Type::I64),
        }
    }
}

/// Presents Guid values as their canonical hyphenated string.
///
/// Reading turns a Guid into a string; writing parses the string back.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuidStringConverter;

impl Converter for GuidStringConverter {
    fn from_db(&self, value: Value) -> Result<Value> {
        match value {
            Value::Uuid(value) => Ok(Value::String(value.hyphenated().to_string())),
            value @ (Value::String(_) | Value::Null) => Ok(value),
            value => Err(Error::type_conversion(value.ty(), Type::String)),
        }
    }

    fn to_db(&self, value: Value) -> Result<Value> {
        value.cast(&Type::Uuid)
    }
}

/// Falls back to the general value conversion, targeting the non-optional
/// type of the model property.
#[derive(Debug, Clone)]
pub struct GenericConverter {
    /// Model-side type
    pub model: Type,

    /// Database-side type
    pub db: Type,
}

impl GenericConverter {
    pub fn new(model: Type, db: Type) -> Self {
        Self { model, db }
    }
}

impl Converter for GenericConverter {
    fn from_db(&self, value: Value) -> Result<Value> {
        value.cast(self.model.non_optional())
    }

    fn to_db(&self, value: Value) -> Result<Value> {
        value.cast(self.db.non_optional())
    }
}
