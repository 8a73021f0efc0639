//! Error types for the convolution pipeline.
//!
//! Every failure is a contract violation at the boundary; the pipeline
//! itself is pure and cannot fail once the shapes are validated.

/// Pipeline-specific errors
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Input pixel buffer is not exactly 28×28
    #[error("invalid image shape: expected {expected} pixels, got {actual}")]
    InvalidImageShape { expected: usize, actual: usize },

    /// Caller-owned output buffer does not hold exactly 6×12×12 entries
    #[error("invalid output shape: expected {expected} entries, got {actual}")]
    InvalidOutputShape { expected: usize, actual: usize },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
