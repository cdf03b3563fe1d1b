//! Compiled row factories.
//!
//! Building a factory resolves everything that depends only on the shape of
//! the row: which column feeds which property, how each value is read and
//! which converter applies. The result is a list of steps that is replayed
//! for every row without further lookups.

use crate::model::{Injector, MaterializeHook, Model, Setter};
use crate::Scalar;

use braise_core::{
    err,
    schema::{Column, Converter, EnumConverter, GenericConverter, GuidStringConverter},
    stmt::{Type, Value},
    Error, Result, Row,
};

use std::{any, sync::Arc};

/// Builds one instance of `T` from the current row.
pub(crate) trait Factory<T>: Send + Sync {
    fn build(&self, row: &dyn Row) -> Result<T>;
}

/// How a value reaches its destination.
pub(crate) enum Read {
    /// Typed accessor; the reader and destination types agree
    Direct { ordinal: usize, ty: Type },

    /// Boxed value passed through a converter
    Converted {
        ordinal: usize,
        converter: Arc<dyn Converter>,
    },

    /// Supplied by the model, independent of the row
    Injected(Injector),

    /// Nothing in the row feeds the destination
    Missing,
}

impl Read {
    /// Picks how the field at `ordinal` is read into `dest`.
    ///
    /// An explicit column converter wins, then the enum adapter, then the
    /// Guid to string adapter. Otherwise values whose types differ go
    /// through [`GenericConverter`] and the rest are copied as read.
    pub(crate) fn resolve(
        row: &dyn Row,
        ordinal: usize,
        dest: &Type,
        column: Option<&Column>,
    ) -> Read {
        let source = row.field_type(ordinal);

        if let Some(converter) = column.and_then(|column| column.converter.clone()) {
            return Read::Converted { ordinal, converter };
        }

        if let Type::Enum(ty) = dest.non_optional() {
            return Read::Converted {
                ordinal,
                converter: Arc::new(EnumConverter::new(ty.clone())),
            };
        }

        if dest.is_string() && *source.non_optional() == Type::Uuid {
            return Read::Converted {
                ordinal,
                converter: Arc::new(GuidStringConverter),
            };
        }

        if source.non_optional() != dest.non_optional() {
            return Read::Converted {
                ordinal,
                converter: Arc::new(GenericConverter::new(dest.clone(), source.clone())),
            };
        }

        Read::Direct {
            ordinal,
            ty: dest.non_optional().clone(),
        }
    }

    /// Reads the value, or `None` when the row holds null.
    pub(crate) fn read(&self, row: &dyn Row) -> Result<Option<Value>> {
        match self {
            Read::Direct { ordinal, ty } => {
                if row.is_null(*ordinal)? {
                    return Ok(None);
                }
                read_direct(row, *ordinal, ty).map(Some)
            }
            Read::Converted { ordinal, converter } => match row.get_value(*ordinal)? {
                Value::Null => Ok(None),
                value => converter.from_db(value).map(Some),
            },
            Read::Injected(supplier) => Ok(Some(supplier())),
            Read::Missing => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Read::Direct { .. } => "direct",
            Read::Converted { .. } => "converted",
            Read::Injected(_) => "injected",
            Read::Missing => "missing",
        }
    }
}

fn read_direct(row: &dyn Row, ordinal: usize, ty: &Type) -> Result<Value> {
    Ok(match ty {
        Type::Bool => row.get_bool(ordinal)?.into(),
        Type::I16 => row.get_i16(ordinal)?.into(),
        Type::I32 => row.get_i32(ordinal)?.into(),
        Type::I64 => row.get_i64(ordinal)?.into(),
        Type::F64 => row.get_f64(ordinal)?.into(),
        Type::String => row.get_string(ordinal)?.into(),
        Type::Uuid => row.get_uuid(ordinal)?.into(),
        Type::DateTime => row.get_datetime(ordinal)?.into(),
        Type::Date => row.get_date(ordinal)?.into(),
        Type::Bytes => row.get_bytes(ordinal)?.into(),
        _ => row.get_value(ordinal)?,
    })
}

/// Factory for a [`Model`] type.
pub(crate) struct ModelFactory<T> {
    type_name: &'static str,
    init: Init<T>,
    on_materialize: Option<MaterializeHook<T>>,
}

enum Init<T> {
    /// Parameterless constructor, then one setter per mapped field
    Populate {
        construct: fn() -> T,
        steps: Vec<PropertyStep<T>>,
    },

    /// The single constructor, fed by parameter name
    Construct {
        build: fn(Vec<Value>) -> Result<T>,
        args: Vec<ArgStep>,
    },
}

struct PropertyStep<T> {
    property: String,
    read: Read,
    set: Setter<T>,
}

struct ArgStep {
    name: String,
    read: Read,

    /// Used when the row holds null
    default: Value,
}

impl<T: Model> ModelFactory<T> {
    pub(crate) fn compile(row: &dyn Row) -> Result<Self> {
        let schema = T::schema();
        let type_name = any::type_name::<T>();

        let init = match (schema.default, schema.constructors.as_slice()) {
            (Some(construct), _) => {
                let mut steps = vec![];

                for ordinal in 0..row.field_count() {
                    let name = row.field_name(ordinal);

                    // Columns without a mapped property are ignored.
                    let Some(column) = schema
                        .table
                        .column_by_name(name)
                        .or_else(|| schema.table.column_by_property(name))
                    else {
                        continue;
                    };

                    if schema.injector(&column.property).is_some() {
                        continue;
                    }

                    let Some(set) = schema.setter(&column.property) else {
                        continue;
                    };

                    steps.push(PropertyStep {
                        property: column.property.clone(),
                        read: Read::resolve(row, ordinal, &column.ty, Some(column)),
                        set,
                    });
                }

                for (property, supplier) in &schema.injectors {
                    let Some(set) = schema.setter(property) else {
                        return Err(err!(
                            "injected property `{property}` of `{type_name}` has no setter"
                        ));
                    };

                    steps.push(PropertyStep {
                        property: property.clone(),
                        read: Read::Injected(supplier.clone()),
                        set,
                    });
                }

                Init::Populate { construct, steps }
            }
            (None, [constructor]) => {
                let args = constructor
                    .params()
                    .map(|(name, ty)| {
                        let read = if let Some(supplier) = schema.injector(name) {
                            Read::Injected(supplier.clone())
                        } else {
                            let column = schema
                                .table
                                .column_by_property(name)
                                .or_else(|| schema.table.column_by_name(name));
                            // The row may alias the column to the parameter name.
                            let ordinal = column
                                .and_then(|column| row.ordinal(&column.name))
                                .or_else(|| row.ordinal(name));

                            match ordinal {
                                Some(ordinal) => Read::resolve(row, ordinal, ty, column),
                                None => Read::Missing,
                            }
                        };

                        ArgStep {
                            name: name.to_string(),
                            read,
                            default: ty.default_value(),
                        }
                    })
                    .collect();

                Init::Construct {
                    build: constructor.build,
                    args,
                }
            }
            (None, constructors) => {
                return Err(Error::ambiguous_constructor(type_name, constructors.len()))
            }
        };

        let factory = Self {
            type_name,
            init,
            on_materialize: schema.on_materialize,
        };

        tracing::debug!(
            type_name,
            steps = factory.step_count(),
            constructor = matches!(factory.init, Init::Construct { .. }),
            "compiled model factory"
        );

        Ok(factory)
    }

    fn step_count(&self) -> usize {
        match &self.init {
            Init::Populate { steps, .. } => steps.len(),
            Init::Construct { args, .. } => args.len(),
        }
    }
}

impl<T: Model> Factory<T> for ModelFactory<T> {
    fn build(&self, row: &dyn Row) -> Result<T> {
        let mut instance = match &self.init {
            Init::Populate { construct, steps } => {
                let mut instance = construct();

                for step in steps {
                    // Null leaves the property at its default.
                    let value = step
                        .read
                        .read(row)
                        .map_err(|err| self.context(err, &step.property))?;
                    if let Some(value) = value {
                        (step.set)(&mut instance, value)
                            .map_err(|err| self.context(err, &step.property))?;
                    }
                }

                instance
            }
            Init::Construct { build, args } => {
                let values = args
                    .iter()
                    .map(|arg| {
                        arg.read
                            .read(row)
                            .map(|value| value.unwrap_or_else(|| arg.default.clone()))
                            .map_err(|err| self.context(err, &arg.name))
                    })
                    .collect::<Result<Vec<_>>>()?;

                build(values)?
            }
        };

        if let Some(hook) = self.on_materialize {
            hook(&mut instance, row)?;
        }

        Ok(instance)
    }
}

impl<T> ModelFactory<T> {
    fn context(&self, err: Error, property: &str) -> Error {
        err.context(err!("cannot populate `{property}` of `{}`", self.type_name))
    }
}

/// Factory for a [`Scalar`] result, reading the first column.
pub(crate) struct ScalarFactory<T> {
    read: Read,
    default: Value,
    _p: std::marker::PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarFactory<T> {
    pub(crate) fn compile(row: &dyn Row) -> Result<Self> {
        if row.field_count() == 0 {
            return Err(err!(
                "cannot read `{}` from a row with no columns",
                any::type_name::<T>()
            ));
        }

        let ty = T::ty();
        let read = Read::resolve(row, 0, &ty, None);

        tracing::debug!(
            type_name = any::type_name::<T>(),
            read = read.name(),
            "compiled scalar factory"
        );

        Ok(Self {
            read,
            default: ty.default_value(),
            _p: std::marker::PhantomData,
        })
    }
}

impl<T: Scalar> Factory<T> for ScalarFactory<T> {
    fn build(&self, row: &dyn Row) -> Result<T> {
        let value = self.read.read(row)?.unwrap_or_else(|| self.default.clone());
        T::from_value(value)
    }
}
