//! Error types for the `ragmark-core` crate.

use thiserror::Error;

/// Errors that can occur in the retrieval pipeline.
///
/// The variants distinguish which stage failed so callers can report it
/// (and so a wrapping layer can retry only the transient kinds:
/// [`Embedding`](RagError::Embedding) and [`Generation`](RagError::Generation)).
#[derive(Debug, Error)]
pub enum RagError {
    /// Bad configuration or empty input. Fatal at startup, recoverable
    /// per-call afterwards.
    #[error("Input error: {0}")]
    Input(String),

    /// Vectors in one index disagree on dimension, or a query vector does
    /// not match the index dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension the index was built with.
        expected: usize,
        /// The offending vector's dimension.
        actual: usize,
    },

    /// An index build was attempted over zero chunks.
    #[error("Index build requires at least one chunk")]
    EmptyIndex,

    /// The embedding backend failed.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The generation backend failed.
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The generation provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RagError>;
