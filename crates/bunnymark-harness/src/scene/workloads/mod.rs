//! Bundled benchmark workloads.
//!
//! Each file holds one concrete [`Scene`](super::Scene). They share small
//! placement helpers here; everything lifecycle-shaped lives in the trait
//! and the runner, not in the workloads.

mod bitmap_text_counting;
mod bitmap_text_static;
mod canvas_text_counting;
mod canvas_text_static;
mod graphics_complex;
mod graphics_simple;
mod spritesheet;
mod sprites_and_graphics;
mod sprites_multi;
mod sprites_single;

pub use bitmap_text_counting::BitmapTextCounting;
pub use bitmap_text_static::BitmapTextStatic;
pub use canvas_text_counting::CanvasTextCounting;
pub use canvas_text_static::CanvasTextStatic;
pub use graphics_complex::GraphicsComplex;
pub use graphics_simple::GraphicsSimple;
pub use spritesheet::Spritesheet;
pub use sprites_and_graphics::SpritesAndGraphics;
pub use sprites_multi::SpritesMultiTexture;
pub use sprites_single::SpritesSingleTexture;

use rand::Rng;

use super::SceneCtx;

/// Number of distinct bunny images in the standard manifest.
pub(crate) const BUNNY_TEXTURES: usize = 12;

pub(crate) fn bunny_texture(index: usize) -> String {
    format!("images/bunny{}.png", index % BUNNY_TEXTURES + 1)
}

/// Uniform position within `[0, width) x [0, height)`.
pub(crate) fn random_position(ctx: &mut SceneCtx<'_>) -> (f32, f32) {
    let x = ctx.rng.gen_range(0.0..ctx.screen.width);
    let y = ctx.rng.gen_range(0.0..ctx.screen.height);
    (x, y)
}

pub(crate) fn random_fill(ctx: &mut SceneCtx<'_>) -> u32 {
    ctx.rng.gen_range(0..=0xffffff)
}
