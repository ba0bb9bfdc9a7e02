//! Pure domain code: geometry, params and scene construction. No I/O.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod params;
