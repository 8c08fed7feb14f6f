//! End-to-end pipeline scenario: ingest a small corpus, then check that a
//! question whose answer sits verbatim in one chunk retrieves that chunk.

use std::sync::Arc;

use ragmark_core::{
    Document, HashingEmbedder, MockGeneration, RagConfig, RagPipeline, RecursiveChunker,
};

/// Three two-paragraph documents; each paragraph fits a chunk on its own
/// but the pair exceeds the maximum chunk size, so every document splits at
/// the paragraph boundary into two chunks, six chunks total.
fn corpus() -> Vec<Document> {
    let texts = [
        "Glaciers carve valleys over millennia.\n\nIce sheets store most of the planet's fresh water.",
        "Harbour seals rest on tidal sandbanks.\n\nThe zephyr collided with the quantum turbines at dusk.",
        "Basalt columns form as lava cools slowly.\n\nObsidian is volcanic glass with no crystal structure.",
    ];
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(format!("doc{}", i + 1), *text, i))
        .collect()
}

fn pipeline() -> RagPipeline {
    let config = RagConfig::builder().chunk_size(80).chunk_overlap(10).top_k(2).build().unwrap();
    RagPipeline::builder()
        .config(config)
        .embedding_provider(Arc::new(HashingEmbedder::new(256)))
        .generation_provider(Arc::new(MockGeneration::new()))
        .chunker(Arc::new(RecursiveChunker::new(80, 10)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn six_chunk_corpus_retrieves_the_verbatim_answer_chunk_in_top_two() {
    let pipeline = pipeline();
    let documents = corpus();

    let index = pipeline.build_index(&documents).await.unwrap();
    assert_eq!(index.len(), 6, "corpus should split into exactly six chunks");

    // The answer lives verbatim in the fourth chunk (doc2, second paragraph).
    let hits = pipeline.retrieve(&index, "What collided with the quantum turbines?").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert!(
        hits.iter().any(|hit| hit.chunk.text.contains("quantum turbines")),
        "expected the verbatim-answer chunk within the top-2 hits, got: {:?}",
        hits.iter().map(|h| h.chunk.id.clone()).collect::<Vec<_>>(),
    );
}

#[tokio::test]
async fn answer_feeds_retrieved_context_to_generation() {
    let pipeline = pipeline();
    let index = pipeline.build_index(&corpus()).await.unwrap();

    // MockGeneration echoes the first context chunk, so the answer proves
    // retrieval order reached the generation provider.
    let answer =
        pipeline.answer(&index, "What collided with the quantum turbines?").await.unwrap();
    assert!(answer.contains("quantum turbines"));
}

#[tokio::test]
async fn empty_document_set_fails_fast() {
    let err = pipeline().build_index(&[]).await.unwrap_err();
    assert!(matches!(err, ragmark_core::RagError::Input(_)));
}
