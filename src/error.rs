//! Application-level errors

use crate::render::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to {operation} '{path}': {error}")]
    FileSystem {
        operation: String,
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("frame count must be at least 1")]
    NoFrames,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, AppError>;
