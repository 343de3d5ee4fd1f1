//! Persisted benchmark preferences.
//!
//! A small key/value store over a fixed key set, persisted as JSON under the
//! platform config directory. Reads never fail upward: a missing or corrupt
//! file simply yields an empty store and the callers' fixed defaults take
//! over. Writes happen eagerly on every `set` so a selection survives a
//! crash or an abandoned load attempt.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Selected engine version tag.
pub const KEY_VERSION: &str = "version";
/// Selected workload id.
pub const KEY_SCENE: &str = "scene";
/// Selected object count.
pub const KEY_COUNT: &str = "count";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefFile {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

/// Preference store bound to one JSON file.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    /// Opens the store at the default platform location
    /// (`<config-dir>/bunnymark/prefs.json`).
    pub fn open_default() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("bunnymark");
        Self::open(dir.join("prefs.json"))
    }

    /// Opens the store at an explicit path. Unreadable or unparseable files
    /// are treated as absent.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<PrefFile>(&text) {
                Ok(file) => file.values,
                Err(e) => {
                    log::warn!("ignoring corrupt preference file {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and persists immediately.
    ///
    /// Persistence failures are logged, not raised; an unwritable disk must
    /// not take the benchmark down.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush() {
            log::warn!("could not persist preferences to {}: {e:#}", self.path.display());
        }
    }

    fn flush(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let file = PrefFile { values: self.values.clone() };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Serializes the current selection into a shareable URL-style query
    /// string appended to `base`, so a run can be reproduced from a link.
    pub fn share_url(&self, base: &str) -> String {
        let mut url = String::from(base);
        let mut sep = '?';

        for key in [KEY_VERSION, KEY_SCENE, KEY_COUNT] {
            if let Some(value) = self.get(key) {
                url.push(sep);
                url.push_str(key);
                url.push('=');
                url.push_str(value);
                sep = '&';
            }
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PrefStore {
        PrefStore::open(dir.path().join("prefs.json"))
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.set(KEY_VERSION, "v6.2.1");
        assert_eq!(store.get(KEY_VERSION), Some("v6.2.1"));

        // A fresh store over the same file sees the persisted value.
        let reopened = store_in(&dir);
        assert_eq!(reopened.get(KEY_VERSION), Some("v6.2.1"));
    }

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(KEY_VERSION), None);
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("prefs.json"), "{not json").unwrap();

        let store = store_in(&dir);
        assert_eq!(store.get(KEY_SCENE), None);
    }

    #[test]
    fn share_url_serializes_selection_in_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set(KEY_COUNT, "100");
        store.set(KEY_VERSION, "v6.2.1");

        assert_eq!(
            store.share_url("https://bench.local/"),
            "https://bench.local/?version=v6.2.1&count=100"
        );
    }
}
