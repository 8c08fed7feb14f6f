//! Deterministic feature-hashing embedder.
//!
//! [`HashingEmbedder`] needs no model weights and no network: it hashes each
//! token of the input into a fixed-dimension histogram and L2-normalises the
//! result. Texts that share vocabulary land near each other under cosine
//! distance, which is enough for demos, tests, and small lexical corpora.

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};

/// Default number of hash buckets (vector dimensions).
const DEFAULT_DIMENSIONS: usize = 256;

/// An [`EmbeddingProvider`] that embeds text by feature hashing.
///
/// Tokens are lowercased alphanumeric runs; each token is FNV-1a hashed into
/// one of `dimensions` buckets and the bucket counts are L2-normalised, so
/// cosine similarity reduces to a dot product.
///
/// # Example
///
/// ```rust,ignore
/// use ragmark_core::HashingEmbedder;
///
/// let embedder = HashingEmbedder::new(128);
/// let v = embedder.embed("retrieval augmented generation").await?;
/// assert_eq!(v.len(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Create an embedder with the given number of dimensions.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, token: &str) -> usize {
        // FNV-1a over the token bytes.
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in token.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        (hash % self.dimensions as u64) as usize
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(RagError::Embedding {
                provider: "Hashing".into(),
                message: "cannot embed empty text".into(),
            });
        }

        let mut histogram = vec![0.0f32; self.dimensions];
        for token in text.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()) {
            let token = token.to_lowercase();
            histogram[self.bucket(&token)] += 1.0;
        }

        let norm: f32 = histogram.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            histogram.iter_mut().for_each(|x| *x /= norm);
        }

        Ok(histogram)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embeddings_are_deterministic_and_normalised() {
        let embedder = HashingEmbedder::new(64);
        let a = embedder.embed("the quick brown fox").await.unwrap();
        let b = embedder.embed("the quick brown fox").await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn shared_vocabulary_is_closer_than_disjoint() {
        let embedder = HashingEmbedder::new(128);
        let query = embedder.embed("rust ownership borrowing").await.unwrap();
        let related = embedder.embed("ownership and borrowing in rust").await.unwrap();
        let unrelated = embedder.embed("banana smoothie recipe blender").await.unwrap();

        let dot = |a: &[f32], b: &[f32]| a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
        assert!(dot(&query, &related) > dot(&query, &unrelated));
    }

    #[tokio::test]
    async fn empty_text_is_an_embedding_error() {
        let err = HashingEmbedder::default().embed("   ").await.unwrap_err();
        assert!(matches!(err, RagError::Embedding { .. }));
    }
}
