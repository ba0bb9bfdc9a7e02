pub mod build_scene;
pub mod pack_path;
pub mod rasterize_scene;
