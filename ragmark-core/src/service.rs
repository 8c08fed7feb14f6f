//! Answer service: the process-wide context object behind the request
//! interface.
//!
//! [`AnswerService`] owns the pipeline and the current index. It exposes the
//! one request-interface operation — answer a question — as an infallible
//! call returning a structured [`AnswerResponse`], so no stage failure ever
//! crosses the boundary as anything but an error payload. State is explicit
//! and passed in at construction, never module-level.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::document::Document;
use crate::error::Result;
use crate::index::VectorIndex;
use crate::pipeline::RagPipeline;

/// The payload returned over the request interface.
///
/// Exactly one of `answer` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerResponse {
    /// The generated answer, when every stage succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// A human-readable message naming the failed stage otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnswerResponse {
    fn ok(answer: String) -> Self {
        Self { answer: Some(answer), error: None }
    }

    fn err(message: String) -> Self {
        Self { answer: None, error: Some(message) }
    }
}

/// Preloaded pipeline state serving question-answer requests.
///
/// The index sits behind an `RwLock<Arc<_>>`: queries clone the `Arc` and
/// read the immutable index without holding the lock, while
/// [`rebuild`](AnswerService::rebuild) swaps in a freshly built index
/// atomically. Requests in flight keep the `Arc` they started with.
pub struct AnswerService {
    pipeline: RagPipeline,
    index: RwLock<Arc<VectorIndex>>,
    timeout: Option<Duration>,
}

impl AnswerService {
    /// Create a service over an already-built index.
    pub fn new(pipeline: RagPipeline, index: VectorIndex) -> Self {
        Self { pipeline, index: RwLock::new(Arc::new(index)), timeout: None }
    }

    /// Bound each answer call by `timeout`; elapsed calls surface in the
    /// error payload. Model calls are long-latency, so callers that cannot
    /// wait indefinitely should set this.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// A snapshot of the current index.
    pub async fn index(&self) -> Arc<VectorIndex> {
        self.index.read().await.clone()
    }

    /// Answer a question with retrieval. Never fails: every stage error is
    /// caught and converted into the [`AnswerResponse`] error payload.
    pub async fn answer(&self, question: &str) -> AnswerResponse {
        let index = self.index().await;

        let answered = match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.pipeline.answer(&index, question)).await {
                    Ok(result) => result,
                    Err(_) => {
                        error!(timeout_ms = limit.as_millis() as u64, "answer timed out");
                        return AnswerResponse::err(format!(
                            "request timed out after {}ms",
                            limit.as_millis()
                        ));
                    }
                }
            }
            None => self.pipeline.answer(&index, question).await,
        };

        match answered {
            Ok(answer) => AnswerResponse::ok(answer),
            Err(e) => {
                error!(error = %e, "answer request failed");
                AnswerResponse::err(e.to_string())
            }
        }
    }

    /// Build a new index over `documents` and atomically swap it in.
    ///
    /// # Errors
    ///
    /// Propagates index-build errors; on error the current index stays
    /// in place.
    pub async fn rebuild(&self, documents: &[Document]) -> Result<()> {
        let fresh = self.pipeline.build_index(documents).await?;
        let chunk_count = fresh.len();
        *self.index.write().await = Arc::new(fresh);
        info!(chunk_count, "swapped in rebuilt index");
        Ok(())
    }
}
