use crate::ShapeKey;
use braise_core::{err, Result};

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::{any::Any, collections::HashMap, sync::Arc};

type Entry = Arc<dyn Any + Send + Sync>;

/// Compiled factories by shape.
///
/// Lookups take a shared lock. A miss takes the single upgradable lock,
/// checks again and builds while holding it, so each key is built exactly
/// once even when several threads miss at the same time. Entries are never
/// evicted.
#[derive(Default)]
pub(crate) struct FactoryCache {
    entries: RwLock<HashMap<ShapeKey, Entry>>,
}

impl FactoryCache {
    pub(crate) fn get_or_build<F>(
        &self,
        key: ShapeKey,
        build: impl FnOnce(&ShapeKey) -> Result<F>,
    ) -> Result<Arc<F>>
    where
        F: Any + Send + Sync,
    {
        if let Some(entry) = self.entries.read().get(&key) {
            return downcast(entry);
        }

        let entries = self.entries.upgradable_read();
        if let Some(entry) = entries.get(&key) {
            return downcast(entry);
        }

        let factory = Arc::new(build(&key)?);

        tracing::debug!(
            type_name = key.type_name(),
            fingerprint = key.fingerprint(),
            kind = ?key.kind(),
            "publishing factory"
        );

        let mut entries = RwLockUpgradableReadGuard::upgrade(entries);
        entries.insert(key, factory.clone());
        Ok(factory)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }
}

fn downcast<F: Any + Send + Sync>(entry: &Entry) -> Result<Arc<F>> {
    entry
        .clone()
        .downcast::<F>()
        .map_err(|_| err!("cached factory has an unexpected type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactoryKind;
    use braise_core::{driver::MemoryCursor, stmt::Type};

    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key() -> ShapeKey {
        let row = MemoryCursor::new().column("Id", "int", Type::I32);
        ShapeKey::new::<i32>(FactoryKind::Scalar, &row)
    }

    #[test]
    fn builds_once_per_key() {
        let cache = FactoryCache::default();
        let builds = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_build(key(), |_| {
                    builds.fetch_add(1, Ordering::SeqCst);
                    Ok(7u32)
                })
                .unwrap();
            assert_eq!(*value, 7);
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_build_is_not_cached() {
        let cache = FactoryCache::default();

        let err = cache
            .get_or_build::<u32>(key(), |_| Err(err!("boom")))
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(cache.len(), 0);

        assert_eq!(*cache.get_or_build(key(), |_| Ok(1u32)).unwrap(), 1);
    }
}
