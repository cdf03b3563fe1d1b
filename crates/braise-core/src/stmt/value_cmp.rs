use super::Value;

use std::cmp::Ordering;

impl Value {
    /// Compares two values, promoting mixed integer and float operands.
    ///
    /// Returns `None` when the values are not comparable (different
    /// non-numeric types or either side null).
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Null, _) | (_, Null) => None,
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (Uuid(a), Uuid(b)) => Some(a.cmp(b)),
            (DateTime(a), DateTime(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            (Bytes(a), Bytes(b)) => Some(a.cmp(b)),
            (F64(_), _) | (_, F64(_)) => self.as_f64()?.partial_cmp(&other.as_f64()?),
            _ => Some(self.as_i64()?.cmp(&other.as_i64()?)),
        }
    }

    /// Equality with numeric promotion. Two nulls are equal; null is never
    /// equal to a non-null value.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_integer_widths_compare() {
        assert_eq!(Value::I16(3).compare(&Value::I64(3)), Some(Ordering::Equal));
        assert_eq!(Value::I32(2).compare(&Value::F64(2.5)), Some(Ordering::Less));
    }

    #[test]
    fn null_is_not_comparable() {
        assert_eq!(Value::Null.compare(&Value::I32(1)), None);
        assert!(Value::Null.loose_eq(&Value::Null));
        assert!(!Value::Null.loose_eq(&Value::I32(0)));
    }

    #[test]
    fn different_kinds_are_not_comparable() {
        assert_eq!(Value::from("1").compare(&Value::I32(1)), None);
    }
}
