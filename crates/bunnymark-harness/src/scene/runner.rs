//! Scene lifecycle controller.
//!
//! Drives exactly one workload at a time through the inactive → active →
//! inactive state machine. Subscription to the per-frame update is explicit
//! state here: `stop` unsubscribes *before* destroying, so no update can
//! race a teardown, and `frame` is a no-op while unsubscribed.

use super::{Scene, SceneCtx, TARGET_FRAME_MS};

/// Owns the single active scene and its update subscription.
#[derive(Default)]
pub struct SceneRunner {
    active: Option<Box<dyn Scene>>,
    subscribed: bool,
}

impl SceneRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Activates `scene` with `count` objects.
    ///
    /// The previous scene must already be stopped; starting over a live one
    /// is a harness programming error.
    pub fn start(&mut self, mut scene: Box<dyn Scene>, ctx: &mut SceneCtx<'_>, count: usize) {
        debug_assert!(self.active.is_none(), "start() while a scene is active");

        let info = scene.info();
        log::info!("scene changed: {}", info.title);
        log::info!("{}", info.description);

        self.subscribed = true;
        scene.create(ctx, count);
        self.active = Some(scene);
    }

    /// Deactivates the current scene, releasing everything it owns.
    pub fn stop(&mut self, ctx: &mut SceneCtx<'_>) {
        // Unsubscribe first: no update may run against a half-destroyed stage.
        self.subscribed = false;

        if let Some(mut scene) = self.active.take() {
            scene.destroy(ctx, 0);
        }
    }

    /// Rescales the live collection to exactly `count` objects.
    ///
    /// Growth re-enters `create` with the requested total (the additive
    /// contract); shrinking delegates to `destroy` which truncates from the
    /// end. A repeated identical count is a strict no-op.
    pub fn change_object_count(&mut self, ctx: &mut SceneCtx<'_>, count: usize) {
        debug_assert!(self.active.is_some(), "change_object_count() on an inactive runner");

        let Some(scene) = self.active.as_mut() else {
            return;
        };

        let live = ctx.stage.len();
        if count > live {
            scene.create(ctx, count);
        } else if count < live {
            scene.destroy(ctx, count);
        }
    }

    /// Delivers one per-frame update, normalizing `elapsed_ms` against the
    /// fixed target frame duration. Silently skipped while unsubscribed.
    pub fn frame(&mut self, ctx: &mut SceneCtx<'_>, elapsed_ms: f32) {
        if !self.subscribed {
            return;
        }

        let delta = elapsed_ms / TARGET_FRAME_MS;
        if let Some(scene) = self.active.as_mut() {
            scene.update(ctx, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ScreenRect, Stage, StageObject};
    use crate::scene::{SceneInfo, DEFAULT_SPIN};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Minimal workload: plain sprites, default destroy/update.
    struct Plain;

    impl Scene for Plain {
        fn info(&self) -> SceneInfo {
            SceneInfo { id: "plain", title: "Plain", description: "test workload" }
        }

        fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
            while ctx.stage.len() < target {
                ctx.stage.push(StageObject::sprite("images/bunny1.png", 10.0, 20.0));
            }
        }
    }

    /// Workload that must detach its objects explicitly before truncation.
    struct Detaching {
        detached: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Scene for Detaching {
        fn info(&self) -> SceneInfo {
            SceneInfo { id: "detaching", title: "Detaching", description: "test workload" }
        }

        fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
            while ctx.stage.len() < target {
                ctx.stage.push(StageObject::sprite("images/bunny1.png", 0.0, 0.0));
            }
        }

        fn destroy(&mut self, ctx: &mut SceneCtx<'_>, keep: usize) {
            let released = ctx.stage.len().saturating_sub(keep);
            self.detached.set(self.detached.get() + released);
            ctx.stage.truncate(keep);
        }
    }

    struct Fixture {
        stage: Stage,
        rng: SmallRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self { stage: Stage::new(), rng: SmallRng::seed_from_u64(7) }
        }

        fn ctx(&mut self) -> SceneCtx<'_> {
            SceneCtx {
                stage: &mut self.stage,
                screen: ScreenRect::new(960.0, 540.0),
                rng: &mut self.rng,
            }
        }
    }

    #[test]
    fn start_then_stop_leaves_the_stage_empty_and_unsubscribed() {
        for n in [0usize, 1, 50] {
            let mut fx = Fixture::new();
            let mut runner = SceneRunner::new();

            runner.start(Box::new(Plain), &mut fx.ctx(), n);
            assert_eq!(fx.stage.len(), n);

            runner.stop(&mut fx.ctx());
            assert!(fx.stage.is_empty());
            assert!(!runner.is_active());

            // Unsubscribed: a frame after stop must not touch anything.
            fx.stage.push(StageObject::sprite("images/bunny1.png", 0.0, 0.0));
            runner.frame(&mut fx.ctx(), TARGET_FRAME_MS);
            assert_eq!(fx.stage.children()[0].rotation, 0.0);
        }
    }

    #[test]
    fn change_object_count_grows_and_truncates() {
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(Box::new(Plain), &mut fx.ctx(), 10);

        runner.change_object_count(&mut fx.ctx(), 25);
        assert_eq!(fx.stage.len(), 25);

        runner.change_object_count(&mut fx.ctx(), 10);
        assert_eq!(fx.stage.len(), 10);
    }

    #[test]
    fn identical_count_is_a_no_op() {
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(Box::new(Plain), &mut fx.ctx(), 8);
        let before: Vec<u64> = fx.stage.ids().collect();

        runner.change_object_count(&mut fx.ctx(), 8);

        assert_eq!(fx.stage.ids().collect::<Vec<_>>(), before);
    }

    #[test]
    fn shrink_keeps_the_head_of_the_collection() {
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(Box::new(Plain), &mut fx.ctx(), 6);
        let head: Vec<u64> = fx.stage.ids().take(2).collect();

        runner.change_object_count(&mut fx.ctx(), 2);
        assert_eq!(fx.stage.ids().collect::<Vec<_>>(), head);
    }

    #[test]
    fn unit_delta_applies_exactly_one_spin_step() {
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(Box::new(Plain), &mut fx.ctx(), 5);

        // elapsed == target duration -> normalized delta of exactly 1.0
        runner.frame(&mut fx.ctx(), TARGET_FRAME_MS);

        for object in fx.stage.children() {
            assert_eq!(object.rotation, DEFAULT_SPIN);
        }
    }

    #[test]
    fn half_delta_applies_half_a_spin_step() {
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(Box::new(Plain), &mut fx.ctx(), 1);
        runner.frame(&mut fx.ctx(), TARGET_FRAME_MS / 2.0);

        assert!((fx.stage.children()[0].rotation - DEFAULT_SPIN / 2.0).abs() < 1e-6);
    }

    #[test]
    fn overridden_destroy_sees_every_released_object() {
        let detached = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut fx = Fixture::new();
        let mut runner = SceneRunner::new();

        runner.start(
            Box::new(Detaching { detached: detached.clone() }),
            &mut fx.ctx(),
            12,
        );

        runner.change_object_count(&mut fx.ctx(), 4);
        assert_eq!(detached.get(), 8);

        runner.stop(&mut fx.ctx());
        assert_eq!(detached.get(), 12);
        assert!(fx.stage.is_empty());
    }
}
