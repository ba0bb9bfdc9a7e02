//! The 1-D Cantor set by iterative middle-third removal.
//!
//! Depth `n` holds `2^n` segments of length `(1/3)^n`, ordered left to right.
//! Time and memory are both `O(2^n)`; callers bound the depth before asking.

use crate::core::data::segment::Segment;
use crate::core::fractals::errors::{CantorError, checked_depth};

/// `2^MAX_LINE_DEPTH` segments is the most a `Vec` can address.
const MAX_LINE_DEPTH: u32 = usize::BITS - 2;

fn subdivide(segments: &[Segment]) -> Vec<Segment> {
    let mut next = Vec::with_capacity(segments.len() * 2);

    for segment in segments {
        next.extend(segment.split_thirds());
    }

    next
}

/// Segments remaining after `depth` rounds of middle-third removal.
pub fn cantor_line_segments(depth: i32) -> Result<Vec<Segment>, CantorError> {
    let depth = checked_depth(depth, MAX_LINE_DEPTH)?;

    let mut segments = vec![Segment::UNIT];
    for _ in 0..depth {
        segments = subdivide(&segments);
    }

    Ok(segments)
}

/// Every level from 0 to `depth` inclusive, built in a single pass.
///
/// `levels[k]` equals `cantor_line_segments(k)`.
pub fn cantor_line_levels(depth: i32) -> Result<Vec<Vec<Segment>>, CantorError> {
    let depth = checked_depth(depth, MAX_LINE_DEPTH)?;

    let mut levels = Vec::with_capacity(depth as usize + 1);
    let mut current = vec![Segment::UNIT];

    for _ in 0..depth {
        let next = subdivide(&current);
        levels.push(std::mem::replace(&mut current, next));
    }
    levels.push(current);

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_the_unit_interval() {
        assert_eq!(cantor_line_segments(0).unwrap(), vec![Segment::UNIT]);
    }

    #[test]
    fn depth_one_keeps_outer_thirds() {
        let segments = cantor_line_segments(1).unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, 0.0);
        assert!((segments[1].start - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn count_and_length_match_depth() {
        for depth in 0..8 {
            let segments = cantor_line_segments(depth).unwrap();
            let expected = (1.0f64 / 3.0).powi(depth);

            assert_eq!(segments.len(), 1 << depth);
            for segment in &segments {
                assert!((segment.length - expected).abs() < 1e-12);
                assert!(segment.start >= 0.0);
                assert!(segment.end() <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn segments_are_ordered_and_disjoint() {
        let segments = cantor_line_segments(6).unwrap();

        for pair in segments.windows(2) {
            assert!(pair[0].end() < pair[1].start);
        }
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert_eq!(
            cantor_line_segments(-1),
            Err(CantorError::NegativeDepth { depth: -1 })
        );
        assert_eq!(
            cantor_line_levels(-3),
            Err(CantorError::NegativeDepth { depth: -3 })
        );
    }

    #[test]
    fn levels_start_with_unit_interval() {
        let levels = cantor_line_levels(0).unwrap();

        assert_eq!(levels, vec![vec![Segment::UNIT]]);
    }

    #[test]
    fn levels_match_individual_depths() {
        let levels = cantor_line_levels(7).unwrap();

        assert_eq!(levels.len(), 8);
        for (k, level) in levels.iter().enumerate() {
            assert_eq!(level, &cantor_line_segments(k as i32).unwrap());
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_segment_lies_in_unit_interval(depth in 0i32..=12) {
            let segments = cantor_line_segments(depth).unwrap();
            let expected = (1.0f64 / 3.0).powi(depth);

            prop_assert_eq!(segments.len(), 1usize << depth);
            for segment in segments {
                prop_assert!(segment.start >= 0.0);
                prop_assert!(segment.end() <= 1.0 + 1e-9);
                prop_assert!((segment.length - expected).abs() < 1e-12);
            }
        }

        #[test]
        fn levels_are_prefix_consistent(depth in 0i32..=10) {
            let levels = cantor_line_levels(depth).unwrap();

            prop_assert_eq!(levels.len(), depth as usize + 1);
            for (k, level) in levels.iter().enumerate() {
                prop_assert_eq!(level, &cantor_line_segments(k as i32).unwrap());
            }
        }

        #[test]
        fn negative_depths_always_fail(depth in i32::MIN..0) {
            prop_assert_eq!(
                cantor_line_segments(depth),
                Err(CantorError::NegativeDepth { depth })
            );
        }
    }
}
