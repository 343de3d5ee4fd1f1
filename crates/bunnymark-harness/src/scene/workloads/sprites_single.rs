use crate::engine::StageObject;
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::random_position;

/// A single bunny texture shared by every sprite: raw sprite throughput.
#[derive(Default)]
pub struct SpritesSingleTexture;

impl Scene for SpritesSingleTexture {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "sprites-single-texture",
            title: "Sprites: Single Texture",
            description: "A single bunny texture is used; this scene should test \
                          the basic raw sprite rendering power.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::sprite("images/bunny1.png", x, y));
        }
    }
}
