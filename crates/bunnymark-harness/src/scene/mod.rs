//! Scene lifecycle.
//!
//! A scene is a self-contained, swappable workload: it populates the stage
//! with N objects, animates them per frame, and tears down cleanly so the
//! next workload starts from an empty stage. The trait's provided methods
//! carry the shared behavior (truncating teardown, the default rotation
//! update); workloads supply `create` and, when their objects need explicit
//! release, override `destroy`.

mod runner;
pub mod registry;
pub mod workloads;

pub use runner::SceneRunner;

use rand::rngs::SmallRng;

use crate::engine::{ScreenRect, Stage};

/// Reference frame duration used to normalize per-frame deltas.
pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;

/// Radians of rotation the default update applies per normalized frame.
pub const DEFAULT_SPIN: f32 = 0.05;

/// Display metadata for a workload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SceneInfo {
    /// Stable identifier used in preferences and share URLs.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// What a scene may touch while it runs: the stage it exclusively owns for
/// the duration, the screen rectangle, and a seeded RNG for placement.
pub struct SceneCtx<'a> {
    pub stage: &'a mut Stage,
    pub screen: ScreenRect,
    pub rng: &'a mut SmallRng,
}

/// The capability set every workload implements.
pub trait Scene {
    fn info(&self) -> SceneInfo;

    /// Ensures at least `target` objects exist on the stage.
    ///
    /// Additive contract: `create` must not assume an empty stage (a fresh
    /// scene always starts on one, cleared by the previous scene's stop) and
    /// growth calls re-enter it with the new, larger total.
    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize);

    /// Releases objects until `keep` remain, discarding from the end.
    ///
    /// The default truncates the stage, which is sufficient for plain data
    /// objects. Workloads whose objects hold engine-side resources must
    /// detach those before truncation.
    fn destroy(&mut self, ctx: &mut SceneCtx<'_>, keep: usize) {
        ctx.stage.truncate(keep);
    }

    /// Per-frame animation with a delta normalized to [`TARGET_FRAME_MS`]
    /// (1.0 means the frame took exactly the target duration).
    fn update(&mut self, ctx: &mut SceneCtx<'_>, delta: f32) {
        default_spin(ctx, delta);
    }
}

/// The stock animation: a small, frame-rate-independent rotation applied to
/// every live object. Exposed so update overrides can keep it.
pub fn default_spin(ctx: &mut SceneCtx<'_>, delta: f32) {
    for object in ctx.stage.children_mut() {
        object.rotation += DEFAULT_SPIN * delta;
    }
}
