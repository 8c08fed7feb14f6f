//! Embedding provider trait for mapping text to fixed-dimension vectors.

use async_trait::async_trait;

use crate::error::Result;

/// A capability that maps text to a fixed-dimension embedding vector.
///
/// Implementations wrap specific backends (a local model, a remote API)
/// behind a unified async interface, so any backend satisfying this contract
/// can be substituted without touching the pipeline. Embeddings must be
/// deterministic for a fixed model version.
///
/// The default [`embed_many`](EmbeddingProvider::embed_many) implementation
/// calls [`embed`](EmbeddingProvider::embed) sequentially; backends with
/// native batching should override it. Either way the output order matches
/// the input order.
///
/// # Example
///
/// ```rust,ignore
/// use ragmark_core::EmbeddingProvider;
///
/// let embedding = provider.embed("hello world").await?;
/// assert_eq!(embedding.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Embedding`](crate::RagError::Embedding) if the
    /// backend is unavailable or rejects the input. The pipeline does not
    /// retry; callers may wrap this in their own retry policy.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs, preserving
    /// input order.
    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
