pub mod colour;
pub mod drawable_path;
pub mod pixel_buffer;
pub mod scene;
pub mod scene_point;
pub mod scene_rect;
pub mod segment;
pub mod unit_point;
