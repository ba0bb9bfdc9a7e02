use crate::core::data::colour::Colour;
use crate::core::data::drawable_path::DrawablePath;
use crate::core::data::scene_rect::SceneRect;

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Stroke the line pieces with the path's stroke width.
    Stroke(Colour),
    /// Fill the rectangles, no outline.
    Fill(Colour),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub path: DrawablePath,
    pub paint: Paint,
}

/// A fully built frame, ready to hand to a renderer.
///
/// Owns its geometry outright; nothing in it refers back to the params it
/// was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub items: Vec<SceneItem>,
    pub bounds: SceneRect,
    pub background: Colour,
    /// Construction level that was built.
    pub level: u32,
    /// Items at `level`: `2^level` segments or `4^level` points.
    pub item_count: u64,
}
