use rayon::prelude::*;

use crate::core::data::unit_point::UnitPoint;
use crate::core::fractals::errors::{CantorError, checked_depth};

/// `4^MAX_DUST_DEPTH` points is the most a `Vec` can address.
const MAX_DUST_DEPTH: u32 = (usize::BITS - 2) / 2;

/// Coordinates of the 1-D Cantor set at `depth`, one per base-3 digit string
/// of length `depth` using only the digits 0 and 2.
///
/// Strings are enumerated most significant digit first with 0 before 2, so
/// the coordinates come out in increasing order.
fn cantor_coordinates(depth: u32) -> Vec<f64> {
    let weights: Vec<f64> = (1..=depth as i32)
        .map(|i| 2.0 * (1.0f64 / 3.0).powi(i))
        .collect();
    let count = 1usize << depth;

    (0..count)
        .map(|digits| {
            weights
                .iter()
                .enumerate()
                .filter(|&(i, _)| ((digits >> (depth as usize - 1 - i)) & 1) == 1)
                .fold(0.0, |x, (_, weight)| x + weight)
        })
        .collect()
}

/// Points of the 2-D Cantor dust at `depth`.
///
/// Built as the Cartesian product of two Cantor coordinate sets: the outer
/// loop walks x, the inner loop walks y. Depth `n` yields `4^n` points, so
/// time and memory are `O(4^n)`; depth 10 is already over a million points.
pub fn cantor_dust_points(depth: i32) -> Result<Vec<UnitPoint>, CantorError> {
    let depth = checked_depth(depth, MAX_DUST_DEPTH)?;
    if depth == 0 {
        return Ok(vec![UnitPoint::ORIGIN]);
    }

    let coordinates = cantor_coordinates(depth);

    let points = coordinates
        .par_iter()
        .flat_map_iter(|&x| coordinates.iter().map(move |&y| UnitPoint { x, y }))
        .collect();

    Ok(points)
}
