/// A closed sub-interval `[start, start + length]` of the unit interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub length: f64,
}

impl Segment {
    /// The whole unit interval, level 0 of every construction.
    pub const UNIT: Self = Self {
        start: 0.0,
        length: 1.0,
    };

    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// Removes the open middle third, returning the left child before the right child.
    #[must_use]
    pub fn split_thirds(&self) -> [Self; 2] {
        let third = self.length / 3.0;

        [
            Self {
                start: self.start,
                length: third,
            },
            Self {
                start: self.start + 2.0 * third,
                length: third,
            },
        ]
    }
}
