pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::export::{ExportController, ExportError, ExportFormat};
pub use crate::controllers::interactive::{
    ControlEvent, InteractiveController, RenderEvent, ScenePresenterPort, Status, run_event_loop,
};
pub use crate::core::actions::build_scene::build_scene::{SCENE_WIDTH, SceneError, build_scene};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::drawable_path::DrawablePath;
pub use crate::core::data::scene::Scene;
pub use crate::core::fractals::cantor_dust::algorithm::cantor_dust_points;
pub use crate::core::fractals::cantor_line::algorithm::{cantor_line_levels, cantor_line_segments};
pub use crate::core::fractals::fractal_kinds::FractalMode;
pub use crate::core::params::{ParamChange, ParamsError, RenderParams};
pub use crate::input::cli::{Cli, CliError};
