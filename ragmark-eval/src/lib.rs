//! # ragmark-eval
//!
//! Evaluation harness for [`ragmark-core`](ragmark_core) pipelines: load a
//! labeled question/answer dataset, run it through the baseline condition
//! (generation alone) and the retrieval-augmented condition, and compare
//! the scores.
//!
//! ## Overview
//!
//! - **[`dataset`]** — [`QaRecord`] loading from CSV and JSON Lines files
//! - **[`scoring`]** — pluggable [`AnswerScorer`] strategies
//! - **[`harness`]** — [`Evaluator`] with per-record failure isolation
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ragmark_eval::{load_qa_dataset, Evaluator};
//!
//! let dataset = load_qa_dataset("data/qa_dataset.csv")?;
//! let evaluator = Evaluator::new(Arc::new(pipeline));
//! let comparison = evaluator.compare(&dataset, &documents).await?;
//! println!(
//!     "baseline {:.3} vs RAG {:.3}",
//!     comparison.baseline.mean_score(),
//!     comparison.rag.mean_score(),
//! );
//! ```

pub mod dataset;
pub mod error;
pub mod harness;
pub mod scoring;

pub use dataset::{load_qa_dataset, QaRecord};
pub use error::{EvalError, Result};
pub use harness::{ComparisonReport, EvalReport, Evaluator, RecordOutcome, RecordScore};
pub use scoring::{AnswerScorer, ExactMatchScorer, TokenF1Scorer};
