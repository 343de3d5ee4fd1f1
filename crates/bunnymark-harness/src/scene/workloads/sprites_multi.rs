use crate::engine::StageObject;
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{bunny_texture, random_position};

/// Cycles through all twelve bunny textures, defeating single-texture
/// batching and exercising texture switches.
#[derive(Default)]
pub struct SpritesMultiTexture;

impl Scene for SpritesMultiTexture {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "sprites-multiple-textures",
            title: "Sprites: Multiple Textures",
            description: "Sprites cycle through twelve bunny textures, \
                          stressing texture binding rather than raw throughput.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let index = ctx.stage.len();
            let (x, y) = random_position(ctx);
            ctx.stage.push(StageObject::sprite(bunny_texture(index), x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ObjectKind, ScreenRect, Stage};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn textures_cycle_through_the_full_set() {
        let mut stage = Stage::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SceneCtx {
            stage: &mut stage,
            screen: ScreenRect::new(960.0, 540.0),
            rng: &mut rng,
        };

        SpritesMultiTexture.create(&mut ctx, 13);

        let texture_of = |i: usize| match &stage.children()[i].kind {
            ObjectKind::Sprite { texture } => texture.clone(),
            other => panic!("unexpected kind {other:?}"),
        };

        assert_eq!(texture_of(0), "images/bunny1.png");
        assert_eq!(texture_of(11), "images/bunny12.png");
        assert_eq!(texture_of(12), "images/bunny1.png");
    }
}
