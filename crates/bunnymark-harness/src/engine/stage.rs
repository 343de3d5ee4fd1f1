//! The live-object collection.
//!
//! A [`Stage`] is the ordered set of renderable objects the active scene
//! owns. Scenes append during `create`, the runner truncates during
//! `destroy`, and the default per-frame update walks it mutably. Object
//! identity is tracked with a monotonically assigned id so callers can tell
//! "same length" apart from "same objects".

/// Shape primitive recorded by graphics workloads.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { width: f32, height: f32, fill: u32 },
    Circle { radius: f32, fill: u32 },
    RoundedRect { width: f32, height: f32, radius: f32, fill: u32 },
}

/// What a stage object renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// Whole-texture sprite.
    Sprite { texture: String },
    /// Named frame out of a texture atlas.
    AtlasSprite { atlas: String, frame: String },
    /// One or more vector primitives drawn as a unit.
    Graphics { shapes: Vec<Shape> },
    /// System-font text.
    Text { content: String, fill: u32 },
    /// Pre-rasterized bitmap-font text.
    BitmapText { font: String, content: String },
}

/// A single live renderable object.
#[derive(Debug, Clone, PartialEq)]
pub struct StageObject {
    id: u64,
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    /// Radians. The default scene update spins this.
    pub rotation: f32,
    pub scale: f32,
    /// Normalized pivot; (0.5, 0.5) is centered.
    pub anchor: (f32, f32),
}

impl StageObject {
    fn new(kind: ObjectKind, x: f32, y: f32) -> Self {
        Self { id: 0, kind, x, y, rotation: 0.0, scale: 1.0, anchor: (0.5, 0.5) }
    }

    pub fn sprite(texture: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(ObjectKind::Sprite { texture: texture.into() }, x, y)
    }

    pub fn atlas_sprite(atlas: impl Into<String>, frame: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(ObjectKind::AtlasSprite { atlas: atlas.into(), frame: frame.into() }, x, y)
    }

    pub fn graphics(shapes: Vec<Shape>, x: f32, y: f32) -> Self {
        Self::new(ObjectKind::Graphics { shapes }, x, y)
    }

    pub fn text(content: impl Into<String>, fill: u32, x: f32, y: f32) -> Self {
        Self::new(ObjectKind::Text { content: content.into(), fill }, x, y)
    }

    pub fn bitmap_text(font: impl Into<String>, content: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(ObjectKind::BitmapText { font: font.into(), content: content.into() }, x, y)
    }

    /// Stable identity assigned on insertion.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Ordered live-object collection, exclusively owned by the active
/// session/scene pair.
#[derive(Debug, Default)]
pub struct Stage {
    children: Vec<StageObject>,
    next_id: u64,
}

impl Stage {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends an object, assigning it a fresh id.
    pub fn push(&mut self, mut object: StageObject) -> u64 {
        object.id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let id = object.id;
        self.children.push(object);
        id
    }

    /// Discards objects from the end until exactly `keep` remain.
    /// Keeps allocated capacity for reuse.
    pub fn truncate(&mut self, keep: usize) {
        self.children.truncate(keep);
    }

    #[inline]
    pub fn children(&self) -> &[StageObject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [StageObject] {
        &mut self.children
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.children.iter().map(|c| c.id)
    }
}
