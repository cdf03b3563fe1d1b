use crate::{
    cache::FactoryCache,
    factory::{Factory, ModelFactory, ScalarFactory},
    FactoryKind, Model, Scalar, ShapeKey,
};

use braise_core::{Cursor, Result, Row};
use braise_sql::RowLimiter;

use std::sync::{Arc, OnceLock};

/// Turns rows into typed values through compiled, cached factories.
#[derive(Default)]
pub struct Materializer {
    cache: FactoryCache,
}

impl Materializer {
    /// Creates a materializer with its own, empty factory cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide materializer. Its factories live as long as the
    /// process.
    pub fn global() -> &'static Materializer {
        static GLOBAL: OnceLock<Materializer> = OnceLock::new();
        GLOBAL.get_or_init(Materializer::new)
    }

    /// Lazily materializes every remaining row of `cursor` into `T`.
    ///
    /// The factory for the cursor's shape is resolved up front; if that
    /// fails the cursor is closed and the error returned.
    pub fn materialize<T: Model, C: Cursor>(
        &self,
        mut cursor: C,
    ) -> Result<Materialize<T, C>> {
        match self.model_factory::<T>(&cursor) {
            Ok(factory) => Ok(Materialize::new(cursor, factory)),
            Err(err) => {
                cursor.close();
                Err(err)
            }
        }
    }

    /// Lazily reads the first column of every remaining row as `T`.
    pub fn materialize_scalar<T: Scalar, C: Cursor>(
        &self,
        mut cursor: C,
    ) -> Result<Materialize<T, C>> {
        match self.scalar_factory::<T>(&cursor) {
            Ok(factory) => Ok(Materialize::new(cursor, factory)),
            Err(err) => {
                cursor.close();
                Err(err)
            }
        }
    }

    /// Builds one `T` from the row the caller has already positioned.
    pub fn read<T: Model>(&self, row: &dyn Row) -> Result<T> {
        self.model_factory::<T>(row)?.build(row)
    }

    /// Number of compiled factories held by this materializer.
    pub fn cached_factories(&self) -> usize {
        self.cache.len()
    }

    fn model_factory<T: Model>(&self, row: &dyn Row) -> Result<Arc<dyn Factory<T>>> {
        let key = ShapeKey::new::<T>(FactoryKind::Model, row);
        let factory: Arc<dyn Factory<T>> = self
            .cache
            .get_or_build::<ModelFactory<T>>(key, |_| ModelFactory::compile(row))?;
        Ok(factory)
    }

    fn scalar_factory<T: Scalar>(&self, row: &dyn Row) -> Result<Arc<dyn Factory<T>>> {
        let key = ShapeKey::new::<T>(FactoryKind::Scalar, row);
        let factory: Arc<dyn Factory<T>> = self
            .cache
            .get_or_build::<ScalarFactory<T>>(key, |_| ScalarFactory::compile(row))?;
        Ok(factory)
    }
}

/// A single-pass sequence of materialized rows.
///
/// Rows are read only as the sequence is iterated. The cursor is closed
/// exactly once: when the rows run out, when reading fails, on
/// [`Materialize::close`] or when the sequence is dropped. After an error the
/// sequence yields nothing more.
pub struct Materialize<T, C: Cursor> {
    cursor: C,
    factory: Arc<dyn Factory<T>>,
    limiter: Option<RowLimiter>,

    /// Rows read from the cursor so far, admitted or not
    index: usize,

    done: bool,
}

impl<T, C: Cursor> Materialize<T, C> {
    fn new(cursor: C, factory: Arc<dyn Factory<T>>) -> Self {
        Self {
            cursor,
            factory,
            limiter: None,
            index: 0,
            done: false,
        }
    }

    /// Skips and takes rows on the reader side, for statements rendered by a
    /// dialect without native offset support.
    pub fn limit(mut self, limiter: impl Into<Option<RowLimiter>>) -> Self {
        self.limiter = limiter.into();
        self
    }

    /// Stops the sequence and releases the cursor.
    pub fn close(&mut self) {
        if !self.done {
            self.done = true;
            self.cursor.close();
        }
    }

    fn fail<E>(&mut self, err: E) -> Option<E> {
        self.close();
        Some(err)
    }
}

impl<T, C: Cursor> Iterator for Materialize<T, C> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }

        loop {
            if self
                .limiter
                .is_some_and(|limiter| limiter.is_exhausted(self.index))
            {
                self.close();
                return None;
            }

            match self.cursor.advance() {
                Ok(true) => {}
                Ok(false) => {
                    self.close();
                    return None;
                }
                Err(err) => return self.fail(Err(err)),
            }

            let index = self.index;
            self.index += 1;

            if self.limiter.is_some_and(|limiter| !limiter.admits(index)) {
                continue;
            }

            return match self.factory.build(&self.cursor) {
                Ok(value) => Some(Ok(value)),
                Err(err) => self.fail(Err(err)),
            };
        }
    }
}

impl<T, C: Cursor> Drop for Materialize<T, C> {
    fn drop(&mut self) {
        self.close();
    }
}
