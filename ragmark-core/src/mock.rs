//! Mock generation provider for tests and keyless demos.

use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;

use crate::document::Chunk;
use crate::error::{RagError, Result};
use crate::generation::GenerationProvider;

/// A [`GenerationProvider`] with canned answers and optional injected
/// failures.
///
/// Questions with a configured canned answer return it. Without one, the
/// mock echoes the first context chunk when context is present (a crude but
/// deterministic stand-in for grounded generation) and a fixed fallback
/// otherwise. Questions registered via [`fail_on`](MockGeneration::fail_on)
/// return a [`RagError::Generation`] instead, which is how harness tests
/// exercise failure isolation.
#[derive(Debug, Default)]
pub struct MockGeneration {
    answers: HashMap<String, String>,
    failing: HashSet<String>,
}

impl MockGeneration {
    /// Create a mock with no canned answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned answer for a question.
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    /// Make a question fail with a generation error.
    pub fn fail_on(mut self, question: impl Into<String>) -> Self {
        self.failing.insert(question.into());
        self
    }
}

#[async_trait]
impl GenerationProvider for MockGeneration {
    async fn generate(&self, question: &str, context: &[Chunk]) -> Result<String> {
        if self.failing.contains(question) {
            return Err(RagError::Generation {
                provider: "Mock".into(),
                message: format!("injected failure for question '{question}'"),
            });
        }

        if let Some(answer) = self.answers.get(question) {
            return Ok(answer.clone());
        }

        Ok(match context.first() {
            Some(chunk) => chunk.text.clone(),
            None => "I don't know.".to_string(),
        })
    }
}
