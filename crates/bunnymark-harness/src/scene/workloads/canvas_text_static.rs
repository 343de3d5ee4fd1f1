use crate::engine::StageObject;
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{random_fill, random_position};

/// System-font text objects with fixed content. Rasterization happens once;
/// this measures how the renderer handles many text quads.
#[derive(Default)]
pub struct CanvasTextStatic;

impl Scene for CanvasTextStatic {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "canvas-text-static",
            title: "Canvas Text: Static",
            description: "System-font text with fixed content; text is \
                          rasterized once and redrawn every frame.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let fill = random_fill(ctx);
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::text("bunnies!", fill, x, y));
        }
    }
}
