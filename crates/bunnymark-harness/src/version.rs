//! Selectable engine versions.
//!
//! The set of installable engine builds is finite and fixed at compile time.
//! Anything an operator (or a stale preference file) hands us is validated
//! against this set; unknown values fall back to [`DEFAULT_VERSION`] rather
//! than surfacing an error.

use std::fmt;

/// Fallback used whenever a persisted or requested version is unknown.
pub const DEFAULT_VERSION: &str = "v6.2.1";

/// Installable engine builds, newest first. This is the order a selection
/// list should present them in.
pub const KNOWN_VERSIONS: &[&str] = &[
    "v6.2.1", "v6.1.3", "v6.0.4",
    "v5.3.11", "v5.2.4", "v5.1.5", "v5.0.4",
    "v4.8.9", "v4.7.3", "v4.6.2", "v4.5.6", "v4.4.4", "v4.3.5", "v4.2.3", "v4.1.1", "v4.0.3",
    "v3.0.11",
];

/// An opaque, orderable identifier naming one installable engine build.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineVersion(String);

impl EngineVersion {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Major component of the version tag (`v6.2.1` -> 6), if parseable.
    pub fn major(&self) -> Option<u32> {
        let digits = self.0.strip_prefix('v').unwrap_or(&self.0);
        digits.split('.').next()?.parse().ok()
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EngineVersion {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// The finite set of versions an operator may select.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    versions: Vec<EngineVersion>,
    default: EngineVersion,
}

impl VersionRegistry {
    /// Registry over the built-in [`KNOWN_VERSIONS`] list.
    pub fn builtin() -> Self {
        Self {
            versions: KNOWN_VERSIONS.iter().map(|v| EngineVersion::new(*v)).collect(),
            default: EngineVersion::new(DEFAULT_VERSION),
        }
    }

    /// Selectable versions, newest first.
    pub fn versions(&self) -> &[EngineVersion] {
        &self.versions
    }

    pub fn default_version(&self) -> &EngineVersion {
        &self.default
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.versions.iter().any(|v| v.as_str() == tag)
    }

    /// Resolves a possibly-absent, possibly-stale stored tag to a member of
    /// the known set. An unrecognized tag is treated as absent, never as an
    /// error.
    pub fn resolve(&self, stored: Option<&str>) -> EngineVersion {
        match stored {
            Some(tag) if self.contains(tag) => EngineVersion::new(tag),
            _ => self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_resolves_to_itself() {
        let reg = VersionRegistry::builtin();
        assert_eq!(reg.resolve(Some("v4.8.9")).as_str(), "v4.8.9");
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        let reg = VersionRegistry::builtin();
        assert_eq!(reg.resolve(Some("v0.0.0")).as_str(), DEFAULT_VERSION);
        assert_eq!(reg.resolve(None).as_str(), DEFAULT_VERSION);
    }

    #[test]
    fn default_is_a_member_of_the_known_set() {
        let reg = VersionRegistry::builtin();
        assert!(reg.contains(reg.default_version().as_str()));
    }

    #[test]
    fn major_component() {
        assert_eq!(EngineVersion::new("v6.2.1").major(), Some(6));
        assert_eq!(EngineVersion::new("v3.0.11").major(), Some(3));
        assert_eq!(EngineVersion::new("garbage").major(), None);
    }
}
