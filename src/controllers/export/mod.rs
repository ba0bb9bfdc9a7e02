//! Scene export to raster and vector files.

mod controller;
pub mod errors;
pub mod format;
pub mod size;

pub use controller::ExportController;
pub use errors::ExportError;
pub use format::ExportFormat;
pub use size::{ExportSize, export_size};
