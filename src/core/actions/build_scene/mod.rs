pub mod build_scene;
