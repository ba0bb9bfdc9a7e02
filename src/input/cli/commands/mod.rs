pub mod animate;
pub mod params;
pub mod render;
pub mod resolve;
