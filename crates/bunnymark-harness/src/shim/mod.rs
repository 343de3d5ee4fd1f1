//! Compatibility shim.
//!
//! Loaded builds span several API generations; downstream code wants to be
//! version-agnostic. `apply` levels the capability table of a freshly loaded
//! build by polyfilling the features older generations lack, recording what
//! it patched. It runs at most once per load: a second call is a no-op, and
//! natively present features are never touched.

use crate::loader::LoadedLibrary;

/// Normalizes a loaded build's capability surface. Idempotent.
pub fn apply(lib: &mut LoadedLibrary) {
    if lib.shim_applied {
        log::debug!("shim already applied to [{}]", lib.version);
        return;
    }

    let caps = &mut lib.capabilities;

    if !caps.atlas_frames {
        caps.atlas_frames = true;
        caps.polyfilled.push("atlas_frames");
    }
    if !caps.bitmap_text {
        caps.bitmap_text = true;
        caps.polyfilled.push("bitmap_text");
    }
    if !caps.shared_ticker {
        caps.shared_ticker = true;
        caps.polyfilled.push("shared_ticker");
    }

    if !caps.polyfilled.is_empty() {
        log::debug!("shim for [{}] polyfilled: {}", lib.version, caps.polyfilled.join(", "));
    }

    lib.shim_applied = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineRegistry;
    use crate::loader::test_support::StubFetcher;
    use crate::loader::Loader;
    use crate::prefs::PrefStore;
    use crate::version::EngineVersion;

    fn load(tag: &str) -> LoadedLibrary {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = PrefStore::open(dir.path().join("prefs.json"));
        let mut loader = Loader::with_fetcher(
            Box::new(StubFetcher { bundle: b"bundle".to_vec() }),
            EngineRegistry::builtin(),
        );
        loader.load(&mut prefs, &EngineVersion::new(tag)).unwrap()
    }

    #[test]
    fn old_generation_gets_polyfills() {
        let mut lib = load("v3.0.11");
        apply(&mut lib);

        assert!(lib.shim_applied());
        assert!(lib.capabilities.atlas_frames);
        assert!(lib.capabilities.bitmap_text);
        assert_eq!(
            lib.capabilities.polyfilled,
            vec!["atlas_frames", "bitmap_text", "shared_ticker"]
        );
    }

    #[test]
    fn current_generation_is_untouched() {
        let mut lib = load("v6.2.1");
        apply(&mut lib);

        assert!(lib.shim_applied());
        assert!(lib.capabilities.polyfilled.is_empty());
    }

    #[test]
    fn double_apply_has_no_further_effect() {
        let mut lib = load("v4.8.9");
        apply(&mut lib);
        let after_first = lib.capabilities.clone();

        apply(&mut lib);
        assert_eq!(lib.capabilities, after_first);
    }
}
