//! Workload registry.
//!
//! Workloads are registered in an explicit ordered list — the order a
//! selection list presents them in — and resolved by their stable id. An
//! unknown or absent stored id falls back to the first entry, mirroring how
//! stale version preferences fall back to the default version.

use super::workloads::{
    BitmapTextCounting, BitmapTextStatic, CanvasTextCounting, CanvasTextStatic, GraphicsComplex,
    GraphicsSimple, Spritesheet, SpritesAndGraphics, SpritesMultiTexture, SpritesSingleTexture,
};
use super::Scene;

/// All bundled workloads, in presentation order.
pub fn builtin() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(SpritesSingleTexture),
        Box::new(SpritesMultiTexture),
        Box::new(Spritesheet),
        Box::new(GraphicsSimple),
        Box::new(GraphicsComplex),
        Box::new(SpritesAndGraphics),
        Box::new(CanvasTextStatic),
        Box::new(CanvasTextCounting::default()),
        Box::new(BitmapTextStatic),
        Box::new(BitmapTextCounting::default()),
    ]
}

/// Index of the workload with the given id.
pub fn find(scenes: &[Box<dyn Scene>], id: &str) -> Option<usize> {
    scenes.iter().position(|s| s.info().id == id)
}

/// Removes and returns the workload matching `stored`, falling back to the
/// first registered workload when `stored` is absent or unknown.
pub fn select(mut scenes: Vec<Box<dyn Scene>>, stored: Option<&str>) -> Box<dyn Scene> {
    debug_assert!(!scenes.is_empty(), "the built-in workload list is never empty");

    let index = stored.and_then(|id| find(&scenes, id)).unwrap_or(0);
    scenes.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_order_is_stable() {
        let scenes = builtin();
        let ids: Vec<&str> = scenes.iter().map(|s| s.info().id).collect();
        assert_eq!(
            ids,
            [
                "sprites-single-texture",
                "sprites-multiple-textures",
                "spritesheet",
                "graphics-simple",
                "graphics-complex",
                "sprites-and-graphics",
                "canvas-text-static",
                "canvas-text-counting",
                "bitmap-text-static",
                "bitmap-text-counting",
            ]
        );
    }

    #[test]
    fn ids_are_unique() {
        let scenes = builtin();
        let mut ids: Vec<&str> = scenes.iter().map(|s| s.info().id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), builtin().len());
    }

    #[test]
    fn unknown_selection_falls_back_to_the_first_workload() {
        let scene = select(builtin(), Some("no-such-scene"));
        assert_eq!(scene.info().id, "sprites-single-texture");

        let scene = select(builtin(), None);
        assert_eq!(scene.info().id, "sprites-single-texture");
    }

    #[test]
    fn known_selection_is_honored() {
        let scene = select(builtin(), Some("graphics-complex"));
        assert_eq!(scene.info().title, "Graphics: Complex");
    }
}
