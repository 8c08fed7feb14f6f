//! Build-once vector index with k-nearest-neighbour queries.
//!
//! [`VectorIndex`] pairs each chunk with its embedding at build time and is
//! immutable afterwards: queries are read-only and safe to issue from many
//! tasks concurrently. Rebuilding means constructing a new index and
//! swapping the shared reference (see
//! [`AnswerService::rebuild`](crate::AnswerService::rebuild)).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{Chunk, SearchHit};
use crate::error::{RagError, Result};

/// The distance metric used by an index.
///
/// A metric is fixed at build time and held for the index lifetime; queries
/// always use the metric the index was built with, since mixing metrics
/// across build and query silently corrupts result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Cosine distance: `1 - cos(a, b)`. Zero-magnitude vectors are treated
    /// as maximally distant.
    #[default]
    Cosine,
    /// Euclidean (L2) distance.
    Euclidean,
}

impl DistanceMetric {
    /// Compute the distance between two equal-length vectors.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Self::Cosine => {
                let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
                let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm_a == 0.0 || norm_b == 0.0 {
                    return 1.0;
                }
                1.0 - dot / (norm_a * norm_b)
            }
            Self::Euclidean => {
                a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum::<f32>().sqrt()
            }
        }
    }
}

/// A chunk paired with its embedding inside the index.
#[derive(Debug, Clone)]
struct IndexEntry {
    chunk: Chunk,
    embedding: Vec<f32>,
}

/// An immutable nearest-neighbour index over chunk embeddings.
///
/// # Example
///
/// ```rust,ignore
/// use ragmark_core::{DistanceMetric, VectorIndex};
///
/// let index = VectorIndex::build(chunks, embeddings, DistanceMetric::Cosine)?;
/// let hits = index.query(&query_vector, 3)?;
/// ```
#[derive(Debug)]
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
    dimensions: usize,
    metric: DistanceMetric,
}

impl VectorIndex {
    /// Build an index by pairing each chunk with its embedding.
    ///
    /// # Errors
    ///
    /// - [`RagError::EmptyIndex`] if `chunks` is empty
    /// - [`RagError::Input`] if the chunk and embedding counts differ, or
    ///   the embeddings have zero dimensions
    /// - [`RagError::DimensionMismatch`] if the embeddings do not all share
    ///   one dimension
    pub fn build(
        chunks: Vec<Chunk>,
        embeddings: Vec<Vec<f32>>,
        metric: DistanceMetric,
    ) -> Result<Self> {
        if chunks.is_empty() {
            return Err(RagError::EmptyIndex);
        }
        if chunks.len() != embeddings.len() {
            return Err(RagError::Input(format!(
                "got {} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let dimensions = embeddings[0].len();
        if dimensions == 0 {
            return Err(RagError::Input("embeddings have zero dimensions".into()));
        }
        for embedding in &embeddings {
            if embedding.len() != dimensions {
                return Err(RagError::DimensionMismatch {
                    expected: dimensions,
                    actual: embedding.len(),
                });
            }
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexEntry { chunk, embedding })
            .collect::<Vec<_>>();

        debug!(entry_count = entries.len(), dimensions, ?metric, "built vector index");

        Ok(Self { entries, dimensions, metric })
    }

    /// Return up to `k` chunks nearest to `query`, ascending by distance.
    ///
    /// `k` is clamped to the index size; ties are broken by insertion order.
    ///
    /// # Errors
    ///
    /// - [`RagError::Input`] if `k == 0`
    /// - [`RagError::DimensionMismatch`] if `query` does not match the
    ///   index dimension
    pub fn query(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if k == 0 {
            return Err(RagError::Input("k must be greater than zero".into()));
        }
        if query.len() != self.dimensions {
            return Err(RagError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                chunk: entry.chunk.clone(),
                distance: self.metric.distance(&entry.embedding, query),
            })
            .collect();

        // Stable sort: equal distances keep insertion order.
        hits.sort_by(|a, b| {
            a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        Ok(hits)
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no chunks. Always `false` for a built index.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimensionality of the indexed embeddings.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The distance metric fixed at build time.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}
