use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::{
    config::CURRENT_VERSION,
    core::{overrides::ParameterOverrides, parameters::ParameterSet, types::Version},
    utils::logging::ScopedTimer,
};

/// Per-world owner of the active [`ParameterSet`], shareable across threads.
///
/// Readers take an immutable [`snapshot`](Self::snapshot) and keep it for the
/// whole step. Writers never mutate a published set in place: they build a
/// recomputed copy and swap it in, so a snapshot can never hold stale derived
/// fields and never changes under a reader.
pub struct ParameterRegistry {
    current: RwLock<Published>,
}

struct Published {
    params: Arc<ParameterSet>,
    generation: u64,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}

impl ParameterRegistry {
    pub fn new(mut params: ParameterSet) -> Self {
        params.recompute();
        Self {
            current: RwLock::new(Published {
                params: Arc::new(params),
                generation: 0,
            }),
        }
    }

    /// Currently published set.
    pub fn snapshot(&self) -> Arc<ParameterSet> {
        Arc::clone(&self.current.read().params)
    }

    /// Number of publications since construction.
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }

    pub fn version(&self) -> Version {
        CURRENT_VERSION
    }

    /// Recomputes `params` and replaces the published set with it.
    pub fn publish(&self, mut params: ParameterSet) -> u64 {
        let _timer = ScopedTimer::new("registry::publish");
        params.recompute();
        let mut current = self.current.write();
        Self::swap(&mut current, params)
    }

    /// Copies the published set, lets `edit` change it, recomputes, and
    /// publishes the result. Concurrent updates are serialized; `edit` must not
    /// call back into the registry.
    pub fn update<F>(&self, edit: F) -> u64
    where
        F: FnOnce(&mut ParameterSet),
    {
        let _timer = ScopedTimer::new("registry::publish");
        let mut current = self.current.write();
        let mut params = ParameterSet::clone(&current.params);
        edit(&mut params);
        params.recompute();
        Self::swap(&mut current, params)
    }

    /// Publishes the current set with `overrides` applied.
    pub fn apply(&self, overrides: &ParameterOverrides) -> u64 {
        if overrides.is_empty() {
            return self.generation();
        }
        self.update(|params| overrides.apply(params))
    }

    fn swap(current: &mut Published, params: ParameterSet) -> u64 {
        current.params = Arc::new(params);
        current.generation += 1;
        debug!("published parameter set generation {}", current.generation);
        current.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_at_generation_zero_with_defaults() {
        let registry = ParameterRegistry::default();
        assert_eq!(registry.generation(), 0);
        assert_eq!(*registry.snapshot(), ParameterSet::new());
    }

    #[test]
    fn publish_recomputes_stale_input() {
        let registry = ParameterRegistry::default();
        let mut params = ParameterSet::new();
        params.set_max_translation(3.0);

        assert_eq!(registry.publish(params), 1);
        assert_eq!(registry.snapshot().max_translation_squared(), 9.0);
    }

    #[test]
    fn empty_overrides_do_not_publish() {
        let registry = ParameterRegistry::default();
        assert_eq!(registry.apply(&ParameterOverrides::new()), 0);
    }
}
