pub mod points_to_rects_path;
pub mod segments_to_path;
