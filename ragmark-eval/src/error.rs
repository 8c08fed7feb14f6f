//! Error types for the `ragmark-eval` crate.

use thiserror::Error;

/// Errors that can occur while loading datasets or driving an evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The dataset file is missing, malformed, or lacks required columns.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// An error propagated from the retrieval pipeline.
    #[error(transparent)]
    Rag(#[from] ragmark_core::RagError),
}

/// A convenience result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
