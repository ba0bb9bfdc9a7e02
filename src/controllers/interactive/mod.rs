//! Interactive controller for debounced and animated scene rendering.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `ControlEvent`s from any front end, fed through `run_event_loop`
//! - **Output**: `ScenePresenterPort` receives built scenes and status updates
//! - **Core**: Uses `build_scene` from `core/` for the actual geometry
//!
//! Two timers decide when a scene is built: the rebuild debounce and the
//! animation tick. They never run together; starting an animation drops a
//! pending rebuild and param changes during an animation are not scheduled.

pub mod animation;
mod controller;
pub mod data;
pub mod errors;
mod event_loop;
pub mod events;
pub mod ports;
pub mod rebuild;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::status::Status;
pub use event_loop::run_event_loop;
pub use events::control::ControlEvent;
pub use events::render::RenderEvent;
pub use ports::presenter::ScenePresenterPort;
