//! Narrow interface over a loaded rendering engine.
//!
//! The harness never talks to a concrete engine build directly. A loaded
//! build is reached through [`RenderEngine`], which exposes exactly what the
//! benchmark needs: the screen rectangle, the live-object stage, texture
//! installation, and a per-frame render call. Everything else an engine can
//! do is out of scope here.

mod reference;
mod registry;
mod stage;

pub use reference::ReferenceFactory;
pub use registry::EngineRegistry;
pub use stage::{ObjectKind, Shape, Stage, StageObject};

use crate::device::Gpu;
use crate::version::EngineVersion;

/// Logical screen rectangle in engine pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenRect {
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// API generation of an engine build. Versions within one generation share
/// an API surface; differences across generations are what the shim levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiGeneration {
    V3,
    V4,
    V5,
    V6,
}

impl ApiGeneration {
    /// Maps a version tag to its generation, if the major is one we know.
    pub fn for_version(version: &EngineVersion) -> Option<Self> {
        match version.major()? {
            3 => Some(Self::V3),
            4 => Some(Self::V4),
            5 => Some(Self::V5),
            6 => Some(Self::V6),
            _ => None,
        }
    }
}

/// Feature surface of a loaded build, as the harness cares about it.
///
/// `native_for` describes what each generation ships on its own; the shim
/// patches the gaps and records which entries were polyfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Named sub-rectangles of a texture atlas can be addressed directly.
    pub atlas_frames: bool,
    /// Pre-rasterized bitmap fonts are supported.
    pub bitmap_text: bool,
    /// The engine drives updates from one shared ticker.
    pub shared_ticker: bool,
    /// Features the shim had to supply, by name.
    pub polyfilled: Vec<&'static str>,
}

impl Capabilities {
    pub fn native_for(generation: ApiGeneration) -> Self {
        let (atlas_frames, bitmap_text, shared_ticker) = match generation {
            ApiGeneration::V3 => (false, false, false),
            ApiGeneration::V4 => (true, true, false),
            ApiGeneration::V5 | ApiGeneration::V6 => (true, true, true),
        };

        Self { atlas_frames, bitmap_text, shared_ticker, polyfilled: Vec::new() }
    }
}

/// Decoded image handed to an engine for texture installation.
///
/// Always RGBA8; decoding happens in the asset layer so engines never see a
/// container format.
#[derive(Debug, Clone)]
pub struct TextureSource {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Construction parameters a factory receives from the bootstrap.
#[derive(Debug, Clone)]
pub struct EngineInit {
    pub version: EngineVersion,
    pub capabilities: Capabilities,
    pub screen: ScreenRect,
    /// Background color as 0xRRGGBB.
    pub background: u32,
    pub transparent: bool,
    pub clear_before_render: bool,
}

/// The capability set every loaded engine build is reduced to.
pub trait RenderEngine {
    fn version(&self) -> &EngineVersion;
    fn generation(&self) -> ApiGeneration;
    fn capabilities(&self) -> &Capabilities;

    /// Logical screen rectangle the session was configured with.
    fn screen(&self) -> ScreenRect;

    /// The ordered live-object collection. Exclusively mutated by the active
    /// scene; nothing else may touch it.
    fn stage(&self) -> &Stage;
    fn stage_mut(&mut self) -> &mut Stage;

    /// Installs a decoded texture under `key`. Re-installing an existing key
    /// replaces it.
    fn install_texture(&mut self, key: &str, source: TextureSource) -> anyhow::Result<()>;
    fn has_texture(&self, key: &str) -> bool;

    /// Renders one frame to the session surface.
    fn render(&mut self, gpu: &mut Gpu<'_>) -> Result<(), wgpu::SurfaceError>;
}

/// Builds a [`RenderEngine`] for one API generation. This is the "global
/// entry point" the loader looks for after a bundle fetch succeeds.
pub trait EngineFactory: Send + Sync {
    fn generation(&self) -> ApiGeneration;
    fn build(&self, init: EngineInit) -> Box<dyn RenderEngine>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_from_version_tag() {
        assert_eq!(
            ApiGeneration::for_version(&EngineVersion::new("v6.2.1")),
            Some(ApiGeneration::V6)
        );
        assert_eq!(
            ApiGeneration::for_version(&EngineVersion::new("v3.0.11")),
            Some(ApiGeneration::V3)
        );
        assert_eq!(ApiGeneration::for_version(&EngineVersion::new("v99.0.0")), None);
    }

    #[test]
    fn old_generations_lack_features() {
        let v3 = Capabilities::native_for(ApiGeneration::V3);
        assert!(!v3.atlas_frames && !v3.bitmap_text && !v3.shared_ticker);

        let v6 = Capabilities::native_for(ApiGeneration::V6);
        assert!(v6.atlas_frames && v6.bitmap_text && v6.shared_ticker);
        assert!(v6.polyfilled.is_empty());
    }
}
