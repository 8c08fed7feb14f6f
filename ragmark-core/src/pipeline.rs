//! Pipeline orchestrator.
//!
//! [`RagPipeline`] wires the chunker, the embedding provider, the vector
//! index, and the generation provider into the two supported flows:
//! building an index over a document set, and answering a question with or
//! without retrieved context.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ragmark_core::{FixedSizeChunker, HashingEmbedder, MockGeneration, RagConfig, RagPipeline};
//!
//! let config = RagConfig::default();
//! let pipeline = RagPipeline::builder()
//!     .config(config.clone())
//!     .embedding_provider(Arc::new(HashingEmbedder::default()))
//!     .generation_provider(Arc::new(MockGeneration::new()))
//!     .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)))
//!     .build()?;
//!
//! let index = pipeline.build_index(&documents).await?;
//! let answer = pipeline.answer(&index, "What is 5G?").await?;
//! ```

use std::sync::Arc;

use tracing::{error, info};

use crate::chunking::Chunker;
use crate::config::RagConfig;
use crate::document::{Chunk, Document, SearchHit};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::generation::GenerationProvider;
use crate::index::VectorIndex;

/// The pipeline orchestrator.
///
/// Holds the capability objects and the configuration; construct one via
/// [`RagPipeline::builder()`]. Errors keep their stage-specific kind
/// ([`RagError::Embedding`], [`RagError::Generation`], index errors) so
/// callers can tell which stage failed and retry only the transient ones.
pub struct RagPipeline {
    config: RagConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
    chunker: Arc<dyn Chunker>,
}

impl RagPipeline {
    /// Create a new [`RagPipelineBuilder`].
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Return a reference to the embedding provider.
    pub fn embedding_provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedding_provider
    }

    /// Chunk all documents and embed them into a fresh [`VectorIndex`].
    ///
    /// The index metric comes from the configuration. Build is a one-time
    /// blocking step; the returned index is immutable and safe to query
    /// concurrently.
    ///
    /// # Errors
    ///
    /// - [`RagError::Input`] if the document set produces zero chunks — an
    ///   empty index is a configuration error, not a recoverable state
    /// - [`RagError::Embedding`] if the embedding backend fails
    /// - index build errors ([`RagError::DimensionMismatch`])
    pub async fn build_index(&self, documents: &[Document]) -> Result<VectorIndex> {
        let mut chunks = Vec::new();
        for document in documents {
            chunks.extend(self.chunker.chunk(document)?);
        }
        if chunks.is_empty() {
            return Err(RagError::Input(
                "document set produced zero chunks; check the document source and chunking parameters"
                    .to_string(),
            ));
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self
            .embedding_provider
            .embed_many(&texts)
            .await
            .inspect_err(|e| error!(error = %e, "embedding failed during index build"))?;

        let index = VectorIndex::build(chunks, embeddings, self.config.metric)?;
        info!(
            document_count = documents.len(),
            chunk_count = index.len(),
            "built index over document set"
        );
        Ok(index)
    }

    /// Embed `question` and return its `top_k` nearest chunks.
    ///
    /// # Errors
    ///
    /// - [`RagError::Embedding`] if embedding the question fails
    /// - [`RagError::DimensionMismatch`] if the provider's dimensionality
    ///   does not match the index
    pub async fn retrieve(&self, index: &VectorIndex, question: &str) -> Result<Vec<SearchHit>> {
        let query_embedding = self
            .embedding_provider
            .embed(question)
            .await
            .inspect_err(|e| error!(error = %e, "embedding failed during retrieval"))?;

        let hits = index.query(&query_embedding, self.config.top_k)?;
        info!(hit_count = hits.len(), "retrieved context");
        Ok(hits)
    }

    /// Answer `question` using retrieved context (the RAG condition).
    ///
    /// Context is passed to the generation provider in retrieval order,
    /// most similar first.
    pub async fn answer(&self, index: &VectorIndex, question: &str) -> Result<String> {
        let hits = self.retrieve(index, question).await?;
        let context: Vec<Chunk> = hits.into_iter().map(|hit| hit.chunk).collect();

        self.generation_provider
            .generate(question, &context)
            .await
            .inspect_err(|e| error!(error = %e, "generation failed"))
    }

    /// Answer `question` without retrieval (the baseline condition).
    pub async fn answer_baseline(&self, question: &str) -> Result<String> {
        self.generation_provider
            .generate(question, &[])
            .await
            .inspect_err(|e| error!(error = %e, "generation failed"))
    }
}

/// Builder for constructing a [`RagPipeline`].
///
/// All fields are required. Call [`build()`](RagPipelineBuilder::build) to
/// validate and produce the pipeline.
#[derive(Default)]
pub struct RagPipelineBuilder {
    config: Option<RagConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    generation_provider: Option<Arc<dyn GenerationProvider>>,
    chunker: Option<Arc<dyn Chunker>>,
}

impl RagPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the generation provider.
    pub fn generation_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.generation_provider = Some(provider);
        self
    }

    /// Set the document chunker.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Build the [`RagPipeline`], validating that all required parts are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Input`] if any required field is missing.
    pub fn build(self) -> Result<RagPipeline> {
        let config =
            self.config.ok_or_else(|| RagError::Input("config is required".to_string()))?;
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| RagError::Input("embedding_provider is required".to_string()))?;
        let generation_provider = self
            .generation_provider
            .ok_or_else(|| RagError::Input("generation_provider is required".to_string()))?;
        let chunker =
            self.chunker.ok_or_else(|| RagError::Input("chunker is required".to_string()))?;

        Ok(RagPipeline { config, embedding_provider, generation_provider, chunker })
    }
}
