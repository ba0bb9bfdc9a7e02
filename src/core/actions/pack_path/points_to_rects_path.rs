use crate::core::data::drawable_path::DrawablePath;
use crate::core::data::scene_point::ScenePoint;
use crate::core::data::scene_rect::SceneRect;
use crate::core::data::unit_point::UnitPoint;

/// Packs unit-square points into one path of filled squares.
///
/// `[0,1]²` maps linearly onto `[x0, x1] × [y0, y1]`; each point becomes a
/// square of side `size` centred on its mapped position.
#[must_use]
pub fn points_to_rects_path(
    points: &[UnitPoint],
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    size: f64,
) -> DrawablePath {
    let scale_x = x1 - x0;
    let scale_y = y1 - y0;
    let mut path = DrawablePath::with_capacity(points.len());

    for point in points {
        let centre = ScenePoint {
            x: x0 + point.x * scale_x,
            y: y0 + point.y * scale_y,
        };
        path.add_rect(SceneRect::centred_square(centre, size));
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_top_left_corner() {
        let path = points_to_rects_path(&[UnitPoint::ORIGIN], 0.0, 1000.0, 0.0, 1000.0, 4.0);

        assert_eq!(path.rects().collect::<Vec<_>>(), vec![SceneRect::new(-2.0, -2.0, 4.0, 4.0)]);
    }

    #[test]
    fn points_map_independently_on_each_axis() {
        let points = [UnitPoint { x: 0.5, y: 1.0 }];

        let path = points_to_rects_path(&points, 10.0, 20.0, 100.0, 300.0, 2.0);

        assert_eq!(path.rects().next(), Some(SceneRect::new(14.0, 299.0, 2.0, 2.0)));
    }

    #[test]
    fn one_rect_per_point() {
        let points = vec![UnitPoint::ORIGIN; 16];

        let path = points_to_rects_path(&points, 0.0, 1.0, 0.0, 1.0, 0.1);

        assert_eq!(path.shape_count(), 16);
    }
}
