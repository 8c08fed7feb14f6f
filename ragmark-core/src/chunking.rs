//! Document chunking strategies.
//!
//! This module provides the [`Chunker`] trait and two implementations:
//!
//! - [`FixedSizeChunker`] — sliding character window with configurable overlap
//! - [`RecursiveChunker`] — splits hierarchically by paragraphs, sentences, then words
//!
//! All sizes are measured in characters, never bytes, so chunking is safe on
//! multi-byte text.

use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// A strategy for splitting documents into chunks.
///
/// Chunking is deterministic: the same document and parameters always
/// produce the same chunk sequence.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Input`] if the document text is empty, or if the
    /// chunker's parameters can never advance through the text
    /// (`overlap >= max_size`).
    fn chunk(&self, document: &Document) -> Result<Vec<Chunk>>;
}

fn validate_window(max_size: usize, overlap: usize) -> Result<()> {
    if overlap >= max_size {
        return Err(RagError::Input(format!(
            "chunk overlap ({overlap}) must be less than chunk max size ({max_size})"
        )));
    }
    Ok(())
}

fn require_text(document: &Document) -> Result<()> {
    if document.text.is_empty() {
        return Err(RagError::Input(format!("document '{}' has no text", document.id)));
    }
    Ok(())
}

fn make_chunk(document: &Document, seq: usize, text: String) -> Chunk {
    Chunk {
        id: format!("{}#{seq}", document.id),
        text,
        seq,
        document_id: document.id.clone(),
        metadata: document.metadata.clone(),
    }
}

/// Splits text into fixed-size chunks by character count with configurable overlap.
///
/// The window advances by `max_size - overlap` characters, so the last
/// `overlap` characters of each chunk reappear at the start of the next one.
/// Chunk IDs are generated as `{document_id}#{seq}`.
///
/// # Example
///
/// ```rust,ignore
/// use ragmark_core::FixedSizeChunker;
///
/// let chunker = FixedSizeChunker::new(256, 50);
/// let chunks = chunker.chunk(&document)?;
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    max_size: usize,
    overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Arguments
    ///
    /// * `max_size` — maximum number of characters per chunk
    /// * `overlap` — number of trailing characters repeated at the start of
    ///   the next chunk
    pub fn new(max_size: usize, overlap: usize) -> Self {
        Self { max_size, overlap }
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, document: &Document) -> Result<Vec<Chunk>> {
        validate_window(self.max_size, self.overlap)?;
        require_text(document)?;

        // Byte offset of every char boundary, plus the end of the text,
        // so windows can be sliced without landing inside a code point.
        let bounds: Vec<usize> =
            document.text.char_indices().map(|(i, _)| i).chain([document.text.len()]).collect();
        let char_count = bounds.len() - 1;

        let step = self.max_size - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < char_count {
            let end = (start + self.max_size).min(char_count);
            let text = document.text[bounds[start]..bounds[end]].to_string();
            chunks.push(make_chunk(document, chunks.len(), text));
            start += step;
        }

        Ok(chunks)
    }
}

/// Splits text hierarchically: paragraphs, then sentences, then words.
///
/// Segments are split at paragraph separators (`\n\n`) first and merged
/// greedily up to `max_size` characters. A segment that still exceeds
/// `max_size` is split again at sentence boundaries (`. `, `! `, `? `),
/// then at spaces, and as a last resort by the fixed character window.
///
/// # Example
///
/// ```rust,ignore
/// use ragmark_core::RecursiveChunker;
///
/// let chunker = RecursiveChunker::new(512, 100);
/// let chunks = chunker.chunk(&document)?;
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    max_size: usize,
    overlap: usize,
}

impl RecursiveChunker {
    /// Create a new `RecursiveChunker`.
    ///
    /// # Arguments
    ///
    /// * `max_size` — maximum number of characters per chunk
    /// * `overlap` — overlap used when a segment falls through to
    ///   fixed-window splitting
    pub fn new(max_size: usize, overlap: usize) -> Self {
        Self { max_size, overlap }
    }
}

/// Separator hierarchy tried in order; once exhausted, segments fall back
/// to the fixed character window.
const SEPARATORS: &[&str] = &["\n\n", ". ", "! ", "? ", " "];

/// Split text at a separator while keeping the separator attached to the
/// preceding segment, so re-concatenation loses nothing.
fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(separator) {
        let end = start + pos + separator.len();
        segments.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

/// Character-window splitting, the last-resort level of the hierarchy.
fn split_by_window(text: &str, max_size: usize, overlap: usize) -> Vec<String> {
    let bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).chain([text.len()]).collect();
    let char_count = bounds.len() - 1;
    let step = max_size - overlap;

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < char_count {
        let end = (start + max_size).min(char_count);
        pieces.push(text[bounds[start]..bounds[end]].to_string());
        start += step;
    }
    pieces
}

/// Split by the first separator in `separators`, merging segments greedily
/// up to `max_size` characters; oversized segments recurse into the next
/// separator level.
fn split_and_merge(
    text: &str,
    max_size: usize,
    overlap: usize,
    separators: &[&str],
) -> Vec<String> {
    if text.chars().count() <= max_size {
        return vec![text.to_string()];
    }
    let Some((separator, rest)) = separators.split_first() else {
        return split_by_window(text, max_size, overlap);
    };

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let flush = |current: &mut String, current_len: &mut usize, pieces: &mut Vec<String>| {
        if current.is_empty() {
            return;
        }
        if *current_len > max_size {
            pieces.extend(split_and_merge(current, max_size, overlap, rest));
        } else {
            pieces.push(std::mem::take(current));
        }
        current.clear();
        *current_len = 0;
    };

    for segment in split_keeping_separator(text, separator) {
        let segment_len = segment.chars().count();
        if current_len + segment_len > max_size && !current.is_empty() {
            flush(&mut current, &mut current_len, &mut pieces);
        }
        current.push_str(segment);
        current_len += segment_len;
    }
    flush(&mut current, &mut current_len, &mut pieces);

    pieces
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, document: &Document) -> Result<Vec<Chunk>> {
        validate_window(self.max_size, self.overlap)?;
        require_text(document)?;

        let pieces = split_and_merge(&document.text, self.max_size, self.overlap, SEPARATORS);

        Ok(pieces
            .into_iter()
            .enumerate()
            .map(|(seq, text)| make_chunk(document, seq, text))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new("doc", text, 0)
    }

    #[test]
    fn fixed_size_respects_max_and_overlap() {
        let chunker = FixedSizeChunker::new(4, 1);
        let chunks = chunker.chunk(&doc("abcdefghij")).unwrap();

        assert!(chunks.iter().all(|c| c.text.chars().count() <= 4));
        // Consecutive chunks share exactly one character.
        for pair in chunks.windows(2) {
            let tail = pair[0].text.chars().last().unwrap();
            let head = pair[1].text.chars().next().unwrap();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn fixed_size_is_deterministic() {
        let chunker = FixedSizeChunker::new(7, 2);
        let document = doc("the quick brown fox jumps over the lazy dog");
        assert_eq!(chunker.chunk(&document).unwrap(), chunker.chunk(&document).unwrap());
    }

    #[test]
    fn fixed_size_coverage_reconstructs_document() {
        let text = "0123456789abcdefghijklmnopqrstuvwxyz";
        let overlap = 3;
        let chunks = FixedSizeChunker::new(10, overlap).chunk(&doc(text)).unwrap();

        let mut rebuilt = chunks[0].text.clone();
        for chunk in &chunks[1..] {
            rebuilt.extend(chunk.text.chars().skip(overlap));
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn fixed_size_handles_multibyte_text() {
        let text = "żółć gęślą jaźń — наука про мову і текст";
        let chunks = FixedSizeChunker::new(8, 2).chunk(&doc(text)).unwrap();
        assert!(chunks.iter().all(|c| c.text.chars().count() <= 8));
    }

    #[test]
    fn chunk_ids_and_provenance() {
        let chunks = FixedSizeChunker::new(5, 0).chunk(&doc("hello world")).unwrap();
        assert_eq!(chunks[0].id, "doc#0");
        assert_eq!(chunks[1].id, "doc#1");
        assert!(chunks.iter().enumerate().all(|(i, c)| c.seq == i && c.document_id == "doc"));
    }

    #[test]
    fn rejects_non_advancing_window() {
        let err = FixedSizeChunker::new(5, 5).chunk(&doc("text")).unwrap_err();
        assert!(matches!(err, RagError::Input(_)));
    }

    #[test]
    fn rejects_empty_document() {
        let err = FixedSizeChunker::new(5, 1).chunk(&doc("")).unwrap_err();
        assert!(matches!(err, RagError::Input(_)));
    }

    #[test]
    fn recursive_prefers_paragraph_boundaries() {
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird one.";
        let chunks = RecursiveChunker::new(30, 5).chunk(&doc(text)).unwrap();

        assert!(chunks.len() >= 2);
        assert!(chunks.iter().all(|c| c.text.chars().count() <= 30));
        assert!(chunks[0].text.starts_with("First paragraph"));
    }

    #[test]
    fn recursive_falls_back_to_words_for_long_sentences() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let chunks = RecursiveChunker::new(20, 4).chunk(&doc(text)).unwrap();

        assert!(chunks.iter().all(|c| c.text.chars().count() <= 20));
        // Re-concatenation loses nothing: separators stay attached.
        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn recursive_is_deterministic() {
        let chunker = RecursiveChunker::new(25, 5);
        let document = doc("Alpha beta gamma. Delta epsilon zeta.\n\nEta theta iota kappa.");
        assert_eq!(chunker.chunk(&document).unwrap(), chunker.chunk(&document).unwrap());
    }
}
