//! Generation-keyed lazy caching for derived geometry.
//!
//! Every mutator on a shape bumps its generation counter; a cached value is
//! valid iff it was computed at the owner's current generation. Caches marked
//! compute-once stay valid for the life of the owner (used for quantities
//! that only depend on immutable parameters, like an image's UV layout).

use std::cell::RefCell;

pub struct Cached<T> {
    slot: RefCell<Option<(u64, T)>>,
    once: bool,
}

impl<T: Clone> Cached<T> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
            once: false,
        }
    }

    /// A cache that is computed on first read and never invalidated.
    pub fn once() -> Self {
        Self {
            slot: RefCell::new(None),
            once: true,
        }
    }

    /// Returns the cached value if it was computed at `generation`,
    /// recomputing it otherwise.
    ///
    /// `compute` runs with the slot unborrowed, so it may read other caches
    /// on the same owner.
    pub fn get_or_compute(&self, generation: u64, compute: impl FnOnce() -> T) -> T {
        if let Some((stored, value)) = self.slot.borrow().as_ref() {
            if self.once || *stored == generation {
                return value.clone();
            }
        }
        let value = compute();
        *self.slot.borrow_mut() = Some((generation, value.clone()));
        value
    }
}

impl<T: Clone> Default for Cached<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Cached<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.slot.borrow().as_ref() {
            Some((generation, _)) => format!("computed@{generation}"),
            None => "empty".to_string(),
        };
        f.debug_struct("Cached")
            .field("state", &state)
            .field("once", &self.once)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_when_generation_changes() {
        let cache = Cached::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = cache.get_or_compute(1, || {
                calls += 1;
                42
            });
            assert_eq!(v, 42);
        }
        assert_eq!(calls, 1);
        let v = cache.get_or_compute(2, || {
            calls += 1;
            43
        });
        assert_eq!(v, 43);
        assert_eq!(calls, 2);
    }

    #[test]
    fn once_cache_ignores_generation_bumps() {
        let cache = Cached::once();
        let first = cache.get_or_compute(1, || 1);
        let second = cache.get_or_compute(9, || 2);
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }
}
