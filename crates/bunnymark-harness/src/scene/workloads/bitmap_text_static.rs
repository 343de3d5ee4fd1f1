use crate::engine::StageObject;
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::random_position;

const FONT: &str = "Desyrel";

/// Bitmap-font text with fixed content: glyphs are plain textured quads, so
/// this should track sprite throughput closely.
#[derive(Default)]
pub struct BitmapTextStatic;

impl Scene for BitmapTextStatic {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "bitmap-text-static",
            title: "Bitmap Text: Static",
            description: "Bitmap-font text with fixed content; glyphs are \
                          textured quads from the font sheet.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::bitmap_text(FONT, "bunnies!", x, y));
        }
    }
}
