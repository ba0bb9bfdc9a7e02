use thiserror::Error;

use crate::core::params::errors::ParamsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    /// The change was invalid and the previous params stay in effect.
    #[error("rejected param change: {0}")]
    Rejected(#[from] ParamsError),
}
