use crate::core::data::scene_point::ScenePoint;

/// Axis-aligned rectangle in scene units, `y` growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` centred on `centre`.
    #[must_use]
    pub fn centred_square(centre: ScenePoint, size: f64) -> Self {
        let half = size / 2.0;

        Self::new(centre.x - half, centre.y - half, size, size)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Height over width, the ratio exports lock to.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_square_is_centred() {
        let rect = SceneRect::centred_square(ScenePoint { x: 10.0, y: 20.0 }, 4.0);

        assert_eq!(rect, SceneRect::new(8.0, 18.0, 4.0, 4.0));
    }

    #[test]
    fn aspect_ratio_is_height_over_width() {
        let rect = SceneRect::new(0.0, 0.0, 1000.0, 24.0);

        assert!((rect.aspect_ratio() - 0.024).abs() < 1e-12);
    }

    #[test]
    fn right_and_bottom_edges() {
        let rect = SceneRect::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(rect.right(), 4.0);
        assert_eq!(rect.bottom(), 6.0);
    }
}
