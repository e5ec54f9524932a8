//! Error types for the reader

use thiserror::Error;

/// Errors raised at the edges of the reader: loading content and accepting
/// viewport sizes from the host. Pagination and navigation never fail.
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Failed to read content: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content source: {0}")]
    Content(#[from] serde_json::Error),
    #[error("Viewport {0}x{1} is not a usable size.")]
    InvalidViewport(f32, f32),
}
