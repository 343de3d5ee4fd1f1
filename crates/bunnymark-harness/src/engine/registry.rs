//! Entry-point registry for fetched engine builds.
//!
//! A bundle fetch only proves the bytes arrived; the build is usable once an
//! entry point for its API generation exists in this registry. That mirrors
//! a script loader waiting for the library's global to appear after
//! execution.

use std::sync::Arc;

use crate::version::EngineVersion;

use super::{ApiGeneration, EngineFactory, ReferenceFactory};

/// Maps engine versions to the factory serving their API generation.
#[derive(Clone)]
pub struct EngineRegistry {
    factories: Vec<Arc<dyn EngineFactory>>,
}

impl EngineRegistry {
    /// Registry with a reference adapter for every known generation.
    pub fn builtin() -> Self {
        let generations = [
            ApiGeneration::V3,
            ApiGeneration::V4,
            ApiGeneration::V5,
            ApiGeneration::V6,
        ];

        Self {
            factories: generations
                .into_iter()
                .map(|g| Arc::new(ReferenceFactory::new(g)) as Arc<dyn EngineFactory>)
                .collect(),
        }
    }

    /// Registry without any entry points. Useful for exercising the loader's
    /// missing-entry-point path.
    pub fn empty() -> Self {
        Self { factories: Vec::new() }
    }

    pub fn register(&mut self, factory: Arc<dyn EngineFactory>) {
        self.factories.push(factory);
    }

    /// Returns the entry point for `version`, if its generation is served.
    pub fn entry_point(&self, version: &EngineVersion) -> Option<Arc<dyn EngineFactory>> {
        let generation = ApiGeneration::for_version(version)?;
        self.factories
            .iter()
            .find(|f| f.generation() == generation)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_serves_every_known_generation() {
        let reg = EngineRegistry::builtin();
        for tag in crate::version::KNOWN_VERSIONS {
            let version = EngineVersion::new(*tag);
            assert!(reg.entry_point(&version).is_some(), "no entry point for {version}");
        }
    }

    #[test]
    fn unknown_generation_has_no_entry_point() {
        let reg = EngineRegistry::builtin();
        assert!(reg.entry_point(&EngineVersion::new("v99.0.0")).is_none());
    }
}
