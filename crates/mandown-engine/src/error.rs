use std::str::Utf8Error;

/// Fatal errors of a rendering attempt. None of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Failed to parse document: {0}")]
    ParseFailure(#[from] Utf8Error),
    #[error("empty document")]
    EmptyDocument,
    #[error("Cannot allocate a {height}x{width} surface")]
    SurfaceAllocation { height: usize, width: usize },
}
