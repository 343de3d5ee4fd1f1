use crate::engine::StageObject;
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{random_position, BUNNY_TEXTURES};

const ATLAS: &str = "spritesheets/bunnies.png";

/// All bunny frames come out of one packed atlas, so every sprite can share
/// a texture binding while still varying its image.
#[derive(Default)]
pub struct Spritesheet;

impl Scene for Spritesheet {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "spritesheet",
            title: "Spritesheet",
            description: "Every bunny is a named frame of one packed atlas; \
                          varied images with a single texture binding.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let frame = format!("bunny{}", ctx.stage.len() % BUNNY_TEXTURES + 1);
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::atlas_sprite(ATLAS, frame, x, y));
        }
    }
}
