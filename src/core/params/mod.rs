pub mod errors;
pub mod param_change;
pub mod render_params;

pub use errors::ParamsError;
pub use param_change::{ParamChange, ParamEffect};
pub use render_params::RenderParams;
