//! Generation provider trait for producing answers from a question and
//! optional retrieved context.

use async_trait::async_trait;

use crate::document::Chunk;
use crate::error::Result;

/// A capability that generates an answer for a question, optionally enriched
/// with retrieved context chunks.
///
/// An empty `context` slice is the baseline condition: the backend answers
/// from its own knowledge. With a non-empty slice, implementations enrich
/// the prompt with the chunks' text in the given order (most similar first —
/// the order produced by retrieval). [`compose_prompt`] is the shared
/// assembly helper.
///
/// Failures carry the [`Generation`](crate::RagError::Generation) error kind,
/// distinct from embedding and index errors, so callers can report which
/// stage failed.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate an answer to `question`, grounded in `context` when non-empty.
    async fn generate(&self, question: &str, context: &[Chunk]) -> Result<String>;
}

/// Assemble the prompt sent to a generation backend.
///
/// With no context this is the question itself. With context, the chunk
/// texts are listed before the question so the question stays closest to the
/// answer position.
pub fn compose_prompt(question: &str, context: &[Chunk]) -> String {
    if context.is_empty() {
        return question.to_string();
    }

    let mut prompt = String::from("Answer the question using the context below.\n\nContext:\n");
    for chunk in context {
        prompt.push_str(&chunk.text);
        prompt.push('\n');
    }
    prompt.push_str("\nQuestion: ");
    prompt.push_str(question);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Chunk {
        Chunk {
            id: format!("d#{}", text.len()),
            text: text.to_string(),
            seq: 0,
            document_id: "d".into(),
            metadata: Default::default(),
        }
    }

    #[test]
    fn baseline_prompt_is_the_question() {
        assert_eq!(compose_prompt("What is 5G?", &[]), "What is 5G?");
    }

    #[test]
    fn context_appears_in_retrieval_order_before_the_question() {
        let chunks = vec![chunk("most similar"), chunk("second")];
        let prompt = compose_prompt("What is 5G?", &chunks);

        let first = prompt.find("most similar").unwrap();
        let second = prompt.find("second").unwrap();
        let question = prompt.find("What is 5G?").unwrap();
        assert!(first < second && second < question);
    }
}
