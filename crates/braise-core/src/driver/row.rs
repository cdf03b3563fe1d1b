use crate::{
    stmt::{Type, Value},
    Result,
};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Read access to the current row of a result set.
///
/// Ordinals are zero-based. Implementations only need to provide the
/// metadata accessors and [`Row::get_value`]; the typed accessors default to
/// fetching the boxed value and unwrapping it, and drivers with native typed
/// reads should override them.
pub trait Row {
    /// Number of fields in the row.
    fn field_count(&self) -> usize;

    /// Name of the field at `ordinal`.
    fn field_name(&self, ordinal: usize) -> &str;

    /// Database-native type name of the field at `ordinal` (e.g. `int`,
    /// `nvarchar`).
    fn field_type_name(&self, ordinal: usize) -> &str;

    /// Type of the values the driver returns for the field at `ordinal`.
    fn field_type(&self, ordinal: usize) -> Type;

    /// Finds a field by name, ignoring ASCII case.
    fn ordinal(&self, name: &str) -> Option<usize> {
        (0..self.field_count()).find(|&i| self.field_name(i).eq_ignore_ascii_case(name))
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.get_value(ordinal)?.is_null())
    }

    /// Fetches the field as a boxed value.
    fn get_value(&self, ordinal: usize) -> Result<Value>;

    fn get_bool(&self, ordinal: usize) -> Result<bool> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i16(&self, ordinal: usize) -> Result<i16> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i32(&self, ordinal: usize) -> Result<i32> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i64(&self, ordinal: usize) -> Result<i64> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_f64(&self, ordinal: usize) -> Result<f64> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_string(&self, ordinal: usize) -> Result<String> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_uuid(&self, ordinal: usize) -> Result<Uuid> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_datetime(&self, ordinal: usize) -> Result<NaiveDateTime> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_date(&self, ordinal: usize) -> Result<NaiveDate> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_bytes(&self, ordinal: usize) -> Result<Vec<u8>> {
        self.get_value(ordinal)?.try_into()
    }
}

/// A forward-only, single-pass result set.
pub trait Cursor: Row {
    /// Moves to the next row. Returns `false` once the result set is
    /// exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Releases the underlying resource. Calling `close` more than once has
    /// no further effect.
    fn close(&mut self);
}
