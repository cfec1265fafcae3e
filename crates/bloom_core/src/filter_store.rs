use crate::errors::Result;
use crate::filter::{Bloom, Membership};
use crate::store::ByteStore;

/// Binds filters to named slots in a byte-store.
///
/// Every operation re-resolves the filter from the store; nothing is
/// cached between calls. The host must serialize operations against the
/// same key, there is no locking here.
pub struct FilterStore<S> {
    store: S,
}

impl<S: ByteStore> FilterStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the filter at `key`, or initialize one.
    ///
    /// A stored value of exactly `FILTER_BYTES` is the live filter. An
    /// absent value, or a value of any other length, is replaced by a
    /// fresh zero filter which is persisted immediately. The reset is
    /// silent: no error, no warning. That masks corruption in exchange
    /// for availability and is load-bearing for compatibility.
    pub fn resolve(&mut self, key: &str) -> Result<Bloom> {
        if let Some(existing) = self.store.read(key)? {
            if let Some(filter) = Bloom::from_bytes(existing) {
                return Ok(filter);
            }
        }
        let fresh = Bloom::new();
        self.store.write(key, fresh.as_bytes())?;
        Ok(fresh)
    }

    /// Record `element` in the filter at `key`.
    ///
    /// Full load → mutate → write-back cycle; the store copy is the
    /// system of record, so the mutated bytes always go back.
    pub fn add(&mut self, key: &str, element: &[u8]) -> Result<()> {
        let mut filter = self.resolve(key)?;
        filter.insert(element);
        self.store.write(key, filter.as_bytes())
    }

    /// Probe the filter at `key` for `element`.
    ///
    /// Not read-only at the store level: resolving an absent or
    /// wrong-length value persists a fresh zero filter as a side effect.
    pub fn check(&mut self, key: &str, element: &[u8]) -> Result<Membership> {
        let filter = self.resolve(key)?;
        Ok(filter.contains(element))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
