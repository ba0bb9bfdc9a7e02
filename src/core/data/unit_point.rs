/// A point of the unit square `[0,1]²`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_in_unit_square() {
        assert!(UnitPoint::ORIGIN.is_in_unit_square());
    }

    #[test]
    fn points_outside_are_rejected() {
        assert!(!UnitPoint { x: 1.5, y: 0.5 }.is_in_unit_square());
        assert!(!UnitPoint { x: 0.5, y: -0.1 }.is_in_unit_square());
    }
}
