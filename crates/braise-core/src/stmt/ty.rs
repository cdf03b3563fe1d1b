use super::{TypeEnum, Value, ValueEnum};

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// The static type of an expression, a column or a model property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// 128-bit globally unique identifier
    Uuid,

    /// Date and time without a time zone
    DateTime,

    /// Calendar date
    Date,

    /// Raw bytes
    Bytes,

    /// An enumerated type backed by integer discriminants
    Enum(TypeEnum),

    /// A type that admits null in addition to the values of the inner type.
    Option(Box<Type>),

    /// A type that could not be inferred (e.g., the query parameter itself)
    Unknown,
}

impl Type {
    pub fn option(ty: impl Into<Self>) -> Self {
        match ty.into() {
            ty @ Self::Option(_) => ty,
            ty => Self::Option(Box::new(ty)),
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.non_optional(), Self::Enum(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.non_optional(), Self::String)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.non_optional(),
            Self::I16 | Self::I32 | Self::I64 | Self::F64
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.non_optional(), Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns the underlying type with any `Option` wrappers removed.
    pub fn non_optional(&self) -> &Type {
        match self {
            Self::Option(inner) => inner.non_optional(),
            ty => ty,
        }
    }

    /// Returns the natural default of the type: zero for numbers, `false`
    /// for booleans, the empty string, the nil Guid, the Unix epoch for
    /// temporal types, the variant with discriminant 0 for enumerations and
    /// null for optional types.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::F64 => Value::F64(0.0),
            Self::String => Value::String(String::new()),
            Self::Uuid => Value::Uuid(uuid::Uuid::nil()),
            Self::DateTime => Value::DateTime(NaiveDateTime::default()),
            Self::Date => Value::Date(NaiveDate::default()),
            Self::Bytes => Value::Bytes(vec![]),
            Self::Enum(ty) => Value::Enum(ValueEnum::from_discriminant(ty, 0)),
            Self::Option(_) | Self::Unknown => Value::Null,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::F64 => f.write_str("f64"),
            Self::String => f.write_str("string"),
            Self::Uuid => f.write_str("uuid"),
            Self::DateTime => f.write_str("datetime"),
            Self::Date => f.write_str("date"),
            Self::Bytes => f.write_str("bytes"),
            Self::Enum(ty) => write!(f, "enum {}", ty.name),
            Self::Option(inner) => write!(f, "option<{inner}>"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
