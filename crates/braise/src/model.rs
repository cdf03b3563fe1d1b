use braise_core::{
    stmt::{Type, Value},
    Result, Row, Table,
};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// A type rows can be materialized into.
pub trait Model: Sized + 'static {
    /// Describes how rows map onto the type.
    ///
    /// Only called while a factory is being built, never per row.
    fn schema() -> ModelSchema<Self>;
}

/// Writes a value into one property of a model instance.
pub type Setter<T> = fn(&mut T, Value) -> Result<()>;

/// Runs after an instance has been populated, with the row it came from.
pub type MaterializeHook<T> = fn(&mut T, &dyn Row) -> Result<()>;

/// Supplies a property value that does not come from the row.
pub type Injector = Arc<dyn Fn() -> Value + Send + Sync>;

/// Row mapping metadata of a model type.
pub struct ModelSchema<T> {
    pub(crate) table: Table,
    pub(crate) default: Option<fn() -> T>,
    pub(crate) constructors: Vec<Constructor<T>>,
    pub(crate) setters: IndexMap<String, Setter<T>>,
    pub(crate) injectors: IndexMap<String, Injector>,
    pub(crate) on_materialize: Option<MaterializeHook<T>>,
}

/// A constructor whose parameters are matched to columns by name.
pub struct Constructor<T> {
    pub(crate) params: Vec<(String, Type)>,
    pub(crate) build: fn(Vec<Value>) -> Result<T>,
}

impl<T> ModelSchema<T> {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            default: None,
            constructors: vec![],
            setters: IndexMap::new(),
            injectors: IndexMap::new(),
            on_materialize: None,
        }
    }

    /// Sets the parameterless constructor. Instances built with it are
    /// populated through property setters.
    pub fn default_constructor(mut self, construct: fn() -> T) -> Self {
        self.default = Some(construct);
        self
    }

    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn property(mut self, name: impl Into<String>, setter: Setter<T>) -> Self {
        self.setters.insert(name.into(), setter);
        self
    }

    /// Populates `name` from `supplier` instead of the row.
    pub fn inject(
        mut self,
        name: impl Into<String>,
        supplier: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        self.injectors.insert(name.into(), Arc::new(supplier));
        self
    }

    pub fn on_materialize(mut self, hook: MaterializeHook<T>) -> Self {
        self.on_materialize = Some(hook);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Finds a property setter, ignoring ASCII case.
    pub fn setter(&self, name: &str) -> Option<Setter<T>> {
        self.setters
            .iter()
            .find(|(property, _)| property.eq_ignore_ascii_case(name))
            .map(|(_, setter)| *setter)
    }

    /// Finds an injector, ignoring ASCII case.
    pub fn injector(&self, name: &str) -> Option<&Injector> {
        self.injectors
            .iter()
            .find(|(property, _)| property.eq_ignore_ascii_case(name))
            .map(|(_, injector)| injector)
    }
}

impl<T> Constructor<T> {
    /// `build` receives one value per declared parameter, in declaration
    /// order.
    pub fn new(build: fn(Vec<Value>) -> Result<T>) -> Self {
        Self {
            params: vec![],
            build,
        }
    }

    /// Declares the next parameter. A parameter with no matching column
    /// receives the default value of `ty`.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.params.push((name.into(), ty.into()));
        self
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &Type)> + '_ {
        self.params.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}

impl<T> fmt::Debug for ModelSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSchema")
            .field("table", &self.table.name)
            .field("default", &self.default.is_some())
            .field("constructors", &self.constructors.len())
            .field("setters", &self.setters.keys().collect::<Vec<_>>())
            .field("injectors", &self.injectors.keys().collect::<Vec<_>>())
            .field("on_materialize", &self.on_materialize.is_some())
            .finish()
    }
}
