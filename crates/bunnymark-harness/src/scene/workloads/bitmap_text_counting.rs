use crate::engine::{ObjectKind, StageObject};
use crate::scene::{default_spin, Scene, SceneCtx, SceneInfo};

use super::random_position;

const FONT: &str = "Desyrel";

/// Bitmap-font text rewritten every frame. Re-layout is cheap (quad
/// placement only), so the gap to the counting canvas-text scene isolates
/// rasterization cost.
#[derive(Default)]
pub struct BitmapTextCounting {
    ticks: f32,
}

impl Scene for BitmapTextCounting {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "bitmap-text-counting",
            title: "Bitmap Text: Counting",
            description: "Bitmap-font text rewritten every frame; re-layout \
                          without re-rasterization.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::bitmap_text(FONT, "0", x, y));
        }
    }

    fn update(&mut self, ctx: &mut SceneCtx<'_>, delta: f32) {
        self.ticks += delta;
        let label = format!("{}", self.ticks as u64);

        for object in ctx.stage.children_mut() {
            if let ObjectKind::BitmapText { content, .. } = &mut object.kind {
                content.clone_from(&label);
            }
        }

        default_spin(ctx, delta);
    }
}
