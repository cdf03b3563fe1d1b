use super::{Type, ValueEnum};
use crate::{Error, Result};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Globally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of the value. Null has no type of its own and reports
    /// [`Type::Unknown`].
    pub fn ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Bytes(_) => Type::Bytes,
            Self::Date(_) => Type::Date,
            Self::DateTime(_) => Type::DateTime,
            // The enumerated type itself is not carried by the value.
            Self::Enum(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::Null => Type::Unknown,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
        }
    }

    /// Returns `true` if the value can stand in for a value of type `ty`
    /// without conversion.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Self::Null, Type::Option(_) | Type::Unknown) => true,
            (value, Type::Option(inner)) => value.is_a(inner),
            (Self::Enum(_), Type::Enum(_)) => true,
            (Self::Enum(_), _) => false,
            (value, ty) => value.ty() == *ty,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it is an integer (or enum
    /// discriminant).
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::Enum(ref v) => Some(v.discriminant),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F64(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::I16(_) | Self::I32(_) | Self::I64(_) | Self::F64(_))
    }

    /// Returns the value as a non-negative count, as used by `Skip`/`Take`.
    pub fn to_usize(&self) -> Result<usize> {
        let Some(v) = self.as_i64() else {
            return Err(Error::type_conversion(self.ty(), "usize"));
        };

        usize::try_from(v).map_err(|_| Error::type_conversion(self.ty(), "usize"))
    }
}

macro_rules! impl_value_conversions {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$name(value) => Ok(value),
                    _ => Err(Error::type_conversion(value.ty(), $lit)),
                }
            }
        }

        impl TryFrom<Value> for Option<$ty> {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::Null => Ok(None),
                    value => Ok(Some(value.try_into()?)),
                }
            }
        }
    };
}

impl_value_conversions!(bool, Bool, "bool");
impl_value_conversions!(Vec<u8>, Bytes, "bytes");
impl_value_conversions!(NaiveDate, Date, "date");
impl_value_conversions!(NaiveDateTime, DateTime, "datetime");
impl_value_conversions!(ValueEnum, Enum, "enum");
impl_value_conversions!(f64, F64, "f64");
impl_value_conversions!(i16, I16, "i16");
impl_value_conversions!(i32, I32, "i32");
impl_value_conversions!(i64, I64, "i64");
impl_value_conversions!(String, String, "string");
impl_value_conversions!(Uuid, Uuid, "uuid");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
