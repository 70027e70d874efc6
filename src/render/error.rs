//! Errors raised by the rendering core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to spawn raster worker for rows {start_y}..{end_y}: {source}")]
    WorkerSpawn {
        start_y: usize,
        end_y: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("raster worker for rows {start_y}..{end_y} panicked")]
    WorkerPanicked { start_y: usize, end_y: usize },

    #[error("invalid band partition: {0}")]
    InvalidPartition(String),

    #[error("image encoding failed: {0}")]
    ImageEncoding(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
