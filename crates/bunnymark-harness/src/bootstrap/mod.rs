//! Renderer bootstrap and benchmark session.
//!
//! Turns a loaded engine build into a running [`RendererSession`]: preloads
//! the asset manifest, constructs the engine through its factory, installs
//! every decoded texture, and from then on owns the scene runner and the
//! timing probe. The session is the [`HarnessApp`] the window runtime drives.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use crate::assets::{self, AssetBundle, AssetManifest};
use crate::core::{AppControl, FrameCtx, HarnessApp};
use crate::device::{ContextOptions, Gpu, SurfaceErrorAction};
use crate::engine::{EngineInit, RenderEngine, ScreenRect};
use crate::loader::LoadedLibrary;
use crate::probe::TimingProbe;
use crate::scene::{Scene, SceneCtx, SceneRunner};
use crate::time::FpsGovernor;

/// Render-quality profile handed to the engine at construction.
///
/// Distinct from [`ContextOptions`]: those govern the surface the harness
/// creates, this is what the engine is told to do with it. Chosen once and
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct RenderQuality {
    pub antialias: bool,
    /// Snap object positions to whole pixels.
    pub round_pixels: bool,
    pub transparent: bool,
    pub clear_before_render: bool,
    pub premultiplied_alpha: bool,
    pub preserve_drawing_buffer: bool,
    /// Refuse to benchmark on a software rasterizer.
    pub fail_if_major_performance_caveat: bool,
    pub power_preference: wgpu::PowerPreference,
}

impl Default for RenderQuality {
    fn default() -> Self {
        Self {
            antialias: false,
            round_pixels: true,
            transparent: false,
            clear_before_render: true,
            premultiplied_alpha: false,
            preserve_drawing_buffer: false,
            fail_if_major_performance_caveat: true,
            power_preference: wgpu::PowerPreference::LowPower,
        }
    }
}

/// Fixed parameters of one benchmark session.
///
/// Every engine version runs against the same configuration so frame times
/// stay comparable run-to-run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Logical screen rectangle, in engine pixels.
    pub screen: ScreenRect,
    /// Device-pixel ratio the engine is told to render at.
    pub resolution: f32,
    /// Clear color as 0xRRGGBB.
    pub background: u32,
    /// What the engine is asked to render like.
    pub quality: RenderQuality,
    /// Surface/context creation flags. The harness, not the engine, creates
    /// the context, so these hold regardless of the engine version.
    pub context: ContextOptions,
    /// Delta clamping for the frame clock.
    pub governor: FpsGovernor,
    /// RNG seed for object placement. `None` seeds from entropy; a fixed
    /// seed makes placements identical across engine versions.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen: ScreenRect::new(960.0, 540.0),
            resolution: 1.0,
            background: 0x1099bb,
            quality: RenderQuality::default(),
            context: ContextOptions::default(),
            governor: FpsGovernor::default(),
            seed: None,
        }
    }
}

/// A fully bootstrapped benchmark: engine, assets, scene runner, probe.
///
/// Constructed only by [`RendererSession::bootstrap`]; if any step fails,
/// no session exists and nothing needs to be torn down.
pub struct RendererSession {
    engine: Box<dyn RenderEngine>,
    assets: AssetBundle,
    runner: SceneRunner,
    probe: Box<dyn TimingProbe>,
    rng: SmallRng,
    config: SessionConfig,
}

impl RendererSession {
    /// Builds a session from a loaded (and shimmed) engine build.
    ///
    /// All-or-nothing: the asset manifest must preload completely and every
    /// texture must install before the session is returned.
    pub fn bootstrap(
        lib: &LoadedLibrary,
        config: SessionConfig,
        probe: Box<dyn TimingProbe>,
        asset_root: &Path,
    ) -> Result<Self> {
        let bundle = assets::preload(asset_root, &AssetManifest::standard())
            .context("asset preload failed; session not started")?;

        let mut engine = lib.build_engine(EngineInit {
            version: lib.version.clone(),
            capabilities: lib.capabilities.clone(),
            screen: config.screen,
            background: config.background,
            transparent: config.quality.transparent,
            clear_before_render: config.quality.clear_before_render,
        });

        for (key, source) in bundle.textures() {
            engine
                .install_texture(key, source.clone())
                .with_context(|| format!("failed to install texture '{key}'"))?;
        }

        log::info!(
            "renderer ready: {} ({:?}), {}x{} @ {}x",
            lib.version,
            lib.generation,
            config.screen.width,
            config.screen.height,
            config.resolution
        );

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Self {
            engine,
            assets: bundle,
            runner: SceneRunner::new(),
            probe,
            rng,
            config,
        })
    }

    pub fn engine(&self) -> &dyn RenderEngine {
        self.engine.as_ref()
    }

    /// Logical screen rectangle the session renders at.
    pub fn screen(&self) -> ScreenRect {
        self.engine.screen()
    }

    pub fn assets(&self) -> &AssetBundle {
        &self.assets
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn scene_active(&self) -> bool {
        self.runner.is_active()
    }

    /// Splits the session into a scene context and the runner it feeds.
    ///
    /// Field-level reborrow so the runner can mutate the stage through the
    /// context while remaining disjoint from the engine borrow.
    fn split(&mut self) -> (SceneCtx<'_>, &mut SceneRunner) {
        let screen = self.engine.screen();
        let ctx = SceneCtx {
            stage: self.engine.stage_mut(),
            screen,
            rng: &mut self.rng,
        };
        (ctx, &mut self.runner)
    }

    /// Activates `scene` with `count` objects, stopping the previous scene
    /// first if one is live.
    pub fn start_scene(&mut self, scene: Box<dyn Scene>, count: usize) {
        let (mut ctx, runner) = self.split();
        if runner.is_active() {
            runner.stop(&mut ctx);
        }
        runner.start(scene, &mut ctx, count);
    }

    /// Stops the active scene, releasing everything it owns.
    pub fn stop_scene(&mut self) {
        let (mut ctx, runner) = self.split();
        runner.stop(&mut ctx);
    }

    /// Rescales the live collection to exactly `count` objects.
    pub fn set_object_count(&mut self, count: usize) {
        let (mut ctx, runner) = self.split();
        runner.change_object_count(&mut ctx, count);
    }

    /// Drives one benchmark frame: update the scene, render, measure.
    ///
    /// The probe window covers the update and the render submission; it
    /// closes even when frame acquisition fails so begin/end stay paired.
    pub fn frame(
        &mut self,
        gpu: &mut Gpu<'_>,
        elapsed_ms: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        self.probe.begin();

        {
            let (mut ctx, runner) = self.split();
            runner.frame(&mut ctx, elapsed_ms);
        }

        let result = self.engine.render(gpu);
        self.probe.end();
        result
    }
}

impl HarnessApp for RendererSession {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match self.frame(ctx.gpu, ctx.time.elapsed_ms()) {
            Ok(()) => AppControl::Continue,
            Err(err) => {
                log::warn!("surface error: {err}");
                match ctx.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        AppControl::Continue
                    }
                }
            }
        }
    }
}

impl Drop for RendererSession {
    fn drop(&mut self) {
        if self.runner.is_active() {
            self.stop_scene();
        }
        self.probe.report();
    }
}
