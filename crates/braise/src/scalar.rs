use braise_core::{
    stmt::{Type, Value},
    Result,
};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// A primitive result type, read from the first column of each row.
pub trait Scalar: Sized + 'static {
    /// Type the column value is converted to before [`Scalar::from_value`].
    fn ty() -> Type;

    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl Scalar for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn from_value(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => String,
    Uuid => Uuid,
    NaiveDateTime => DateTime,
    NaiveDate => Date,
    Vec<u8> => Bytes,
}

impl<T: Scalar> Scalar for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}
