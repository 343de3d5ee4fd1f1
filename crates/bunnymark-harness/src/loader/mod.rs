//! Dynamic engine loader.
//!
//! Given a selected [`EngineVersion`], the loader persists the choice,
//! resolves the CDN download URL from a fixed template, fetches the bundle,
//! and resolves the build's entry point in the [`EngineRegistry`]. A failed
//! fetch is reported once (version + URL) and surfaces as a typed error; it
//! is never retried and never falls back to another version — the next
//! attempt is an explicit rerun chosen by the operator.

use std::time::Duration;

use thiserror::Error;

use crate::engine::{ApiGeneration, Capabilities, EngineFactory, EngineRegistry};
use crate::prefs::{self, PrefStore};
use crate::version::EngineVersion;

/// CDN host the versioned bundles are published under.
pub const DOWNLOAD_HOST: &str = "https://pixijs.download";
/// Bundle file name within a version's directory.
pub const BUNDLE_FILE: &str = "pixi.min.js";

/// Deterministic download URL for a version.
pub fn bundle_url(version: &EngineVersion) -> String {
    format!("{DOWNLOAD_HOST}/{version}/{BUNDLE_FILE}")
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("bundle was empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not load engine [{version}] from [{url}]: {source}")]
    Fetch {
        version: EngineVersion,
        url: String,
        source: FetchError,
    },
    #[error("no entry point registered for engine [{version}]")]
    EntryPoint { version: EngineVersion },
}

/// Fetches a bundle by URL. Swapped out in tests to simulate failures.
pub trait BundleFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher over the CDN endpoint.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("default reqwest client configuration is valid");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes()?.to_vec();
        if bytes.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(bytes)
    }
}

/// A successfully fetched and resolved engine build, ready for the shim and
/// the bootstrap. Holds the capability table the factory will hand to the
/// engines it constructs.
pub struct LoadedLibrary {
    pub version: EngineVersion,
    pub generation: ApiGeneration,
    pub capabilities: Capabilities,
    pub(crate) shim_applied: bool,
    pub(crate) factory: std::sync::Arc<dyn EngineFactory>,
    /// Raw bundle size, for the load report.
    pub bundle_len: usize,
}

impl std::fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("version", &self.version)
            .field("generation", &self.generation)
            .field("capabilities", &self.capabilities)
            .field("shim_applied", &self.shim_applied)
            .field("bundle_len", &self.bundle_len)
            .finish_non_exhaustive()
    }
}

impl LoadedLibrary {
    pub fn shim_applied(&self) -> bool {
        self.shim_applied
    }

    /// Constructs a renderer through the build's entry point.
    pub fn build_engine(&self, init: crate::engine::EngineInit) -> Box<dyn crate::engine::RenderEngine> {
        self.factory.build(init)
    }
}

/// One-shot loader for a selected version. `&mut self` on [`Loader::load`]
/// keeps loads serialized; the harness assumes one in-flight load at a time.
pub struct Loader {
    fetcher: Box<dyn BundleFetcher>,
    registry: EngineRegistry,
}

impl Loader {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new()), EngineRegistry::builtin())
    }

    pub fn with_fetcher(fetcher: Box<dyn BundleFetcher>, registry: EngineRegistry) -> Self {
        Self { fetcher, registry }
    }

    /// Loads the engine build for `version`.
    ///
    /// The selection is persisted *before* the fetch so a rerun after a
    /// failure sees the version the operator actually chose instead of
    /// silently retrying a half-applied selection.
    pub fn load(
        &mut self,
        prefs: &mut PrefStore,
        version: &EngineVersion,
    ) -> Result<LoadedLibrary, LoadError> {
        prefs.set(prefs::KEY_VERSION, version.as_str());

        let url = bundle_url(version);
        log::info!("fetching engine bundle from {url}");

        let bundle = self.fetcher.fetch(&url).map_err(|source| {
            log::error!(
                "could not load engine [{version}] from [{url}]: {source} — may not be a valid version"
            );
            LoadError::Fetch { version: version.clone(), url: url.clone(), source }
        })?;

        let Some(factory) = self.registry.entry_point(version) else {
            log::warn!("bundle for [{version}] fetched but exposed no known entry point");
            return Err(LoadError::EntryPoint { version: version.clone() });
        };

        let generation = factory.generation();
        log::info!(
            "loaded engine [{version}] ({} bytes, generation {generation:?})",
            bundle.len()
        );

        Ok(LoadedLibrary {
            version: version.clone(),
            generation,
            capabilities: Capabilities::native_for(generation),
            shim_applied: false,
            factory,
            bundle_len: bundle.len(),
        })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FailingFetcher, StubFetcher};
    use super::*;

    fn temp_prefs(dir: &tempfile::TempDir) -> PrefStore {
        PrefStore::open(dir.path().join("prefs.json"))
    }

    #[test]
    fn url_follows_the_fixed_template() {
        let version = EngineVersion::new("v6.2.1");
        assert_eq!(bundle_url(&version), "https://pixijs.download/v6.2.1/pixi.min.js");
    }

    #[test]
    fn successful_load_resolves_an_entry_point() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);

        let mut loader = Loader::with_fetcher(
            Box::new(StubFetcher { bundle: b"bundle".to_vec() }),
            EngineRegistry::builtin(),
        );

        let lib = loader.load(&mut prefs, &EngineVersion::new("v6.2.1")).unwrap();
        assert_eq!(lib.generation, ApiGeneration::V6);
        assert_eq!(lib.bundle_len, 6);
        assert!(!lib.shim_applied());
    }

    #[test]
    fn fetch_failure_reports_and_constructs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);

        let mut loader =
            Loader::with_fetcher(Box::new(FailingFetcher), EngineRegistry::builtin());

        let err = loader.load(&mut prefs, &EngineVersion::new("v6.2.1")).unwrap_err();
        match err {
            LoadError::Fetch { version, url, .. } => {
                assert_eq!(version.as_str(), "v6.2.1");
                assert_eq!(url, "https://pixijs.download/v6.2.1/pixi.min.js");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn version_is_persisted_before_the_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);

        let mut loader =
            Loader::with_fetcher(Box::new(FailingFetcher), EngineRegistry::builtin());
        let _ = loader.load(&mut prefs, &EngineVersion::new("v5.3.11"));

        // Optimistic persistence: the selection survives even a failed fetch.
        assert_eq!(prefs.get(prefs::KEY_VERSION), Some("v5.3.11"));
    }

    #[test]
    fn fetched_bundle_without_entry_point_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = temp_prefs(&dir);

        let mut loader = Loader::with_fetcher(
            Box::new(StubFetcher { bundle: b"bundle".to_vec() }),
            EngineRegistry::empty(),
        );

        let err = loader.load(&mut prefs, &EngineVersion::new("v6.2.1")).unwrap_err();
        assert!(matches!(err, LoadError::EntryPoint { .. }));
    }
}
