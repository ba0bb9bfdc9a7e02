use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::params::errors::ParamsError;
use crate::core::params::render_params::RenderParams;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access params file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed params file: {0}")]
    Format(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ParamsError),
}

/// Reads params from a JSON file.
///
/// Missing fields take their defaults. The result is validated exactly like
/// a live change would be.
pub fn load_params(filepath: impl AsRef<Path>) -> Result<RenderParams, StorageError> {
    let contents = fs::read_to_string(filepath)?;
    let params: RenderParams = serde_json::from_str(&contents)?;
    params.validate()?;

    Ok(params)
}

/// Pretty-printed JSON form of `params`, newline-terminated.
pub fn params_to_json(params: &RenderParams) -> Result<String, StorageError> {
    let mut contents = serde_json::to_string_pretty(params)?;
    contents.push('\n');

    Ok(contents)
}

pub fn save_params(params: &RenderParams, filepath: impl AsRef<Path>) -> Result<(), StorageError> {
    fs::write(filepath, params_to_json(params)?)?;

    Ok(())
}
