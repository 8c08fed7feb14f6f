//! Data types for documents, chunks, and retrieval hits.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A source document loaded from some corpus.
///
/// Documents are immutable once loaded; the pipeline only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document (by convention, its source path).
    pub id: String,
    /// The text content of the document.
    pub text: String,
    /// Position of the document within its corpus load order.
    pub position: usize,
    /// Key-value metadata associated with the document.
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Create a document with no metadata.
    pub fn new(id: impl Into<String>, text: impl Into<String>, position: usize) -> Self {
        Self { id: id.into(), text: text.into(), position, metadata: HashMap::new() }
    }
}

/// A bounded-size segment of a [`Document`], the unit of indexing.
///
/// A chunk keeps a provenance back-reference to its source document
/// (`document_id`) but does not own it, and it does not carry an embedding:
/// the (chunk, vector) pairing is owned by the index that was built over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier, generated as `{document_id}#{seq}`.
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// Sequence index of this chunk within its source document.
    pub seq: usize,
    /// The ID of the source [`Document`].
    pub document_id: String,
    /// Metadata inherited from the source document.
    pub metadata: HashMap<String, String>,
}

/// A retrieved [`Chunk`] paired with its distance to the query vector.
///
/// Lower distance means more similar; query results are ordered ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Distance between the chunk's vector and the query vector.
    pub distance: f32,
}
