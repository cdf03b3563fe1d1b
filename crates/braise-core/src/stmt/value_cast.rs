use super::{Type, TypeEnum, Value, ValueEnum};
use crate::{Error, Result};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl Value {
    /// General numeric/temporal conversion of a value to `ty`.
    ///
    /// Null stays null whatever the target. Integer narrowing is checked,
    /// floats are rounded to the nearest integer, strings are parsed, dates
    /// widen to midnight and date-times narrow to their date.
    pub fn cast(self, ty: &Type) -> Result<Value> {
        if self.is_null() {
            return Ok(Value::Null);
        }

        let from = self.ty();
        let fail = || Error::type_conversion(&from, ty);

        Ok(match ty {
            Type::Option(inner) => return self.cast(inner),
            Type::Unknown => self,
            Type::Enum(ty) => Value::Enum(self.cast_enum(ty).ok_or_else(fail)?),
            Type::Bool => Value::Bool(match self {
                Value::Bool(v) => v,
                Value::String(v) => parse_bool(&v).ok_or_else(fail)?,
                Value::F64(v) => v != 0.0,
                v => v.as_i64().ok_or_else(fail)? != 0,
            }),
            Type::I16 => Value::I16(
                self.cast_integer()?
                    .try_into()
                    .map_err(|_| fail())?,
            ),
            Type::I32 => Value::I32(
                self.cast_integer()?
                    .try_into()
                    .map_err(|_| fail())?,
            ),
            Type::I64 => Value::I64(self.cast_integer()?),
            Type::F64 => Value::F64(match self {
                Value::String(v) => v.trim().parse::<f64>()?,
                Value::Bool(v) => u8::from(v).into(),
                v => v.as_f64().ok_or_else(fail)?,
            }),
            Type::String => Value::String(match self {
                Value::String(v) => v,
                Value::Bool(v) => v.to_string(),
                Value::I16(v) => v.to_string(),
                Value::I32(v) => v.to_string(),
                Value::I64(v) => v.to_string(),
                Value::F64(v) => v.to_string(),
                Value::Uuid(v) => v.to_string(),
                Value::Date(v) => v.format("%Y-%m-%d").to_string(),
                Value::DateTime(v) => v.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
                Value::Enum(v) => match v.variant {
                    Some(name) => name,
                    None => v.discriminant.to_string(),
                },
                Value::Bytes(_) | Value::Null => return Err(fail()),
            }),
            Type::Uuid => Value::Uuid(match self {
                Value::Uuid(v) => v,
                Value::String(v) => Uuid::parse_str(v.trim())?,
                Value::Bytes(v) => Uuid::from_slice(&v)?,
                _ => return Err(fail()),
            }),
            Type::DateTime => Value::DateTime(match self {
                Value::DateTime(v) => v,
                Value::Date(v) => v.and_hms_opt(0, 0, 0).ok_or_else(fail)?,
                Value::String(v) => parse_datetime(&v)?,
                _ => return Err(fail()),
            }),
            Type::Date => Value::Date(match self {
                Value::Date(v) => v,
                Value::DateTime(v) => v.date(),
                Value::String(v) => match NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d") {
                    Ok(date) => date,
                    Err(_) => parse_datetime(&v)?.date(),
                },
                _ => return Err(fail()),
            }),
            Type::Bytes => Value::Bytes(match self {
                Value::Bytes(v) => v,
                Value::String(v) => v.into_bytes(),
                Value::Uuid(v) => v.as_bytes().to_vec(),
                _ => return Err(fail()),
            }),
        })
    }

    fn cast_integer(self) -> Result<i64> {
        let from = self.ty();

        match self {
            Value::Bool(v) => Ok(v.into()),
            Value::String(v) => Ok(v.trim().parse::<i64>()?),
            Value::F64(v) if v.is_finite() => {
                let rounded = v.round();
                if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
                    return Err(Error::type_conversion(from, Type::I64));
                }
                Ok(rounded as i64)
            }
            v => v
                .as_i64()
                .ok_or_else(|| Error::type_conversion(from, Type::I64)),
        }
    }

    fn cast_enum(self, ty: &TypeEnum) -> Option<ValueEnum> {
        match self {
            Value::Enum(v) => Some(ValueEnum::from_discriminant(ty, v.discriminant)),
            Value::String(v) => match ty.by_name(v.trim()) {
                Some(variant) => Some(ValueEnum {
                    discriminant: variant.discriminant,
                    variant: Some(variant.name.clone()),
                }),
                None => v
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .map(|d| ValueEnum::from_discriminant(ty, d)),
            },
            v => v.as_i64().map(|d| ValueEnum::from_discriminant(ty, d)),
        }
    }
}

fn parse_bool(src: &str) -> Option<bool> {
    let src = src.trim();
    if src.eq_ignore_ascii_case("true") || src == "1" {
        Some(true)
    } else if src.eq_ignore_ascii_case("false") || src == "0" {
        Some(false)
    } else {
        None
    }
}

fn parse_datetime(src: &str) -> Result<NaiveDateTime> {
    let src = src.trim();
    let mut last = None;

    for format in DATETIME_FORMATS {
        match NaiveDateTime::parse_from_str(src, format) {
            Ok(value) => return Ok(value),
            Err(err) => last = Some(err),
        }
    }

    match NaiveDate::parse_from_str(src, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::type_conversion(Type::String, Type::DateTime)),
        Err(_) => Err(last.map_or_else(
            || Error::type_conversion(Type::String, Type::DateTime),
            Error::from,
        )),
    }
}
