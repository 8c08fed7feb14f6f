//! # ragmark-core
//!
//! Retrieval-augmented question answering: split documents into chunks,
//! index their embeddings, retrieve the nearest chunks for a question, and
//! generate an answer grounded in them.
//!
//! ## Overview
//!
//! - **[`chunking`]** — [`Chunker`] trait, fixed-window and recursive splitters
//! - **[`embedding`]** — [`EmbeddingProvider`] capability trait
//! - **[`index`]** — build-once [`VectorIndex`] with k-NN queries
//! - **[`generation`]** — [`GenerationProvider`] capability trait and prompt assembly
//! - **[`pipeline`]** — [`RagPipeline`] orchestrator (build index, retrieve, answer)
//! - **[`service`]** — [`AnswerService`], the request-interface context object
//! - **[`loader`]** — document-directory loading
//! - **[`hashing`]** / **[`mock`]** — deterministic keyless providers
//! - **[`openai`]** — HTTP-backed providers (feature `openai`)
//!
//! The embedding and generation backends are swappable capabilities: any
//! implementation of the provider traits can be substituted without touching
//! the pipeline.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ragmark_core::{
//!     Document, FixedSizeChunker, HashingEmbedder, MockGeneration, RagConfig, RagPipeline,
//! };
//!
//! # async fn run() -> ragmark_core::Result<()> {
//! let config = RagConfig::default();
//! let pipeline = RagPipeline::builder()
//!     .config(config.clone())
//!     .embedding_provider(Arc::new(HashingEmbedder::default()))
//!     .generation_provider(Arc::new(MockGeneration::new()))
//!     .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)))
//!     .build()?;
//!
//! let documents = vec![Document::new("doc", "Rust is a systems language.", 0)];
//! let index = pipeline.build_index(&documents).await?;
//! let answer = pipeline.answer(&index, "What is Rust?").await?;
//! # Ok(())
//! # }
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod hashing;
pub mod index;
pub mod loader;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;
pub mod pipeline;
pub mod service;

pub use chunking::{Chunker, FixedSizeChunker, RecursiveChunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, Document, SearchHit};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use generation::{compose_prompt, GenerationProvider};
pub use hashing::HashingEmbedder;
pub use index::{DistanceMetric, VectorIndex};
pub use loader::load_documents;
pub use mock::MockGeneration;
pub use pipeline::{RagPipeline, RagPipelineBuilder};
pub use service::{AnswerResponse, AnswerService};
