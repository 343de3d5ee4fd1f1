use crate::engine::{Shape, StageObject};
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{bunny_texture, random_fill, random_position};

/// Alternates sprites and vector shapes, forcing the renderer to keep
/// switching pipelines mid-batch.
#[derive(Default)]
pub struct SpritesAndGraphics;

impl Scene for SpritesAndGraphics {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "sprites-and-graphics",
            title: "Sprites & Graphics",
            description: "Sprites interleaved with vector shapes; batches break \
                          on every other object.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let index = ctx.stage.len();
            let (x, y) = random_position(ctx);

            let object = if index % 2 == 0 {
                StageObject::sprite(bunny_texture(index / 2), x, y)
            } else {
                let fill = random_fill(ctx);
                StageObject::graphics(vec![Shape::Rect { width: 40.0, height: 40.0, fill }], x, y)
            };
            ctx.stage.push(object);
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
    fn kinds_alternate() {
        let mut stage = Stage::new();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut ctx = SceneCtx {
            stage: &mut stage,
            screen: ScreenRect::new(960.0, 540.0),
            rng: &mut rng,
        };

        SpritesAndGraphics.create(&mut ctx, 6);

        for (i, object) in stage.children().iter().enumerate() {
            match (&object.kind, i % 2) {
                (ObjectKind::Sprite { .. }, 0) | (ObjectKind::Graphics { .. }, 1) => {}
                (kind, _) => panic!("object {i} has unexpected kind {kind:?}"),
            }
        }
    }
}
