use crate::core::data::drawable_path::DrawablePath;
use crate::core::data::scene_point::ScenePoint;
use crate::core::data::segment::Segment;

/// Packs unit-interval segments into one path of horizontal strokes.
///
/// `[0,1]` maps linearly onto `[x0, x1]` at the fixed height `y`.
/// `thickness` is recorded as the path's stroke width and is not baked into
/// the geometry.
#[must_use]
pub fn segments_to_path(segments: &[Segment], x0: f64, x1: f64, y: f64, thickness: f64) -> DrawablePath {
    let scale = x1 - x0;
    let mut path = DrawablePath::with_capacity(segments.len() * 2);
    path.set_stroke_width(thickness);

    for segment in segments {
        let start = x0 + segment.start * scale;
        let end = start + segment.length * scale;

        path.move_to(ScenePoint { x: start, y });
        path.line_to(ScenePoint { x: end, y });
    }

    path
}
