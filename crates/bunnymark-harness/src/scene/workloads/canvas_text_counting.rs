use crate::engine::{ObjectKind, StageObject};
use crate::scene::{default_spin, Scene, SceneCtx, SceneInfo};

use super::{random_fill, random_position};

/// System-font text whose content changes every frame, forcing a
/// re-rasterization of every object per frame.
#[derive(Default)]
pub struct CanvasTextCounting {
    /// Accumulated normalized frames; the displayed number.
    ticks: f32,
}

impl Scene for CanvasTextCounting {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "canvas-text-counting",
            title: "Canvas Text: Counting",
            description: "System-font text rewritten every frame; stresses \
                          text rasterization, not just drawing.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let fill = random_fill(ctx);
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::text("0", fill, x, y));
        }
    }

    fn update(&mut self, ctx: &mut SceneCtx<'_>, delta: f32) {
        self.ticks += delta;
        let label = format!("{}", self.ticks as u64);

        for object in ctx.stage.children_mut() {
            if let ObjectKind::Text { content, .. } = &mut object.kind {
                content.clone_from(&label);
            }
        }

        default_spin(ctx, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ScreenRect, Stage};
    use crate::scene::DEFAULT_SPIN;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn update_rewrites_content_and_keeps_the_default_spin() {
        let mut stage = Stage::new();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut ctx = SceneCtx {
            stage: &mut stage,
            screen: ScreenRect::new(960.0, 540.0),
            rng: &mut rng,
        };

        let mut scene = CanvasTextCounting::default();
        scene.create(&mut ctx, 2);

        scene.update(&mut ctx, 1.0);
        scene.update(&mut ctx, 1.0);

        for object in stage.children() {
            match &object.kind {
                ObjectKind::Text { content, .. } => assert_eq!(content, "2"),
                other => panic!("unexpected kind {other:?}"),
            }
            assert!((object.rotation - 2.0 * DEFAULT_SPIN).abs() < 1e-6);
        }
    }
}
