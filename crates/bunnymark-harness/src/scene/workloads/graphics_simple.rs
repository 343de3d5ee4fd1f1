use crate::engine::{Shape, StageObject};
use crate::scene::{Scene, SceneCtx, SceneInfo};

use super::{random_fill, random_position};

/// One filled circle per object: the cheapest possible vector workload.
#[derive(Default)]
pub struct GraphicsSimple;

impl Scene for GraphicsSimple {
    fn info(&self) -> SceneInfo {
        SceneInfo {
            id: "graphics-simple",
            title: "Graphics: Simple",
            description: "Each object is a single filled circle; measures the \
                          per-object overhead of the vector path.",
        }
    }

    fn create(&mut self, ctx: &mut SceneCtx<'_>, target: usize) {
        while ctx.stage.len() < target {
            let fill = random_fill(ctx);
            let (x, y) = random_position(ctx);
            let shapes = vec![Shape::Circle { radius: 25.0, fill }];
            ctx.stage.push(StageObject::graphics(shapes, x, y));
        }
    }
}
