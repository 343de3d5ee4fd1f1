use crate::engine::{Shape, StageObject};
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{random_fill, random_position};

/// Several primitives per object, so per-object geometry dominates over
/// per-object bookkeeping.
#[derive(Default)]
pub struct GraphicsComplex;

impl Scene for GraphicsComplex {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "graphics-complex",
            title: "Graphics: Complex",
            description: "Each object combines a rectangle, a rounded rectangle \
                          and a circle; measures raw vector geometry throughput.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let fill = random_fill(ctx);
            let accent = random_fill(ctx);
            let (x, y) = random_position(ctx);

            let shapes = vec![
                Shape::Rect { width: 60.0, height: 40.0, fill },
                Shape::RoundedRect { width: 50.0, height: 30.0, radius: 8.0, fill: accent },
                Shape::Circle { radius: 12.0, fill: accent },
            ];
            ctx.stage.push(StageObject::graphics(shapes, x, y));
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
    fn each_object_carries_three_primitives() {
        let mut stage = Stage::new();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut ctx = SceneCtx {
            stage: &mut stage,
            screen: ScreenRect::new(960.0, 540.0),
            rng: &mut rng,
        };

        GraphicsComplex.create(&mut ctx, 4);

        for object in stage.children() {
            match &object.kind {
                ObjectKind::Graphics { shapes } => assert_eq!(shapes.len(), 3),
                other => panic!("unexpected kind {other:?}"),
            }
        }
    }
}
