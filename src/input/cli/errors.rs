use thiserror::Error;

use crate::controllers::export::ExportError;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::core::actions::build_scene::build_scene::SceneError;
use crate::core::params::errors::ParamsError;
use crate::storage::params_file::StorageError;

/// Exit code for rejected input.
pub const EXIT_INVALID_ARGUMENT: i32 = 2;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("invalid argument: a looping animation needs --max-frames")]
    UnboundedAnimation,
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Params(_)
            | Self::Controller(ControllerError::Rejected(_))
            | Self::UnboundedAnimation
            | Self::Storage(StorageError::Invalid(_))
            | Self::Export(ExportError::WidthOutOfRange { .. }) => EXIT_INVALID_ARGUMENT,
            _ => EXIT_FAILURE,
        }
    }
}
