//! # Answer Service Example
//!
//! Builds the full question-answering stack with **zero API keys**: the
//! deterministic `HashingEmbedder` and the canned `MockGeneration` stand in
//! for real model backends.
//!
//! Run: `cargo run --example answer_service`

use std::sync::Arc;

use ragmark_core::{
    AnswerService, Document, HashingEmbedder, MockGeneration, RagConfig, RagPipeline,
    RecursiveChunker,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // -- 1. Configure the pipeline ----------------------------------------
    let config = RagConfig::builder()
        .embedding_model("hashing-256")
        .chunk_size(200)
        .chunk_overlap(40)
        .top_k(2)
        .build()?;

    // -- 2. Build the pipeline with keyless components ---------------------
    let generation = MockGeneration::new()
        .with_answer("What is Rust?", "A systems programming language focused on safety.");
    let pipeline = RagPipeline::builder()
        .config(config.clone())
        .embedding_provider(Arc::new(HashingEmbedder::new(256)))
        .generation_provider(Arc::new(generation))
        .chunker(Arc::new(RecursiveChunker::new(config.chunk_size, config.chunk_overlap)))
        .build()?;

    // -- 3. Index a small corpus ------------------------------------------
    let documents = vec![
        Document::new(
            "rust.txt",
            "Rust is a systems programming language focused on safety, speed, and \
             concurrency. It achieves memory safety without a garbage collector.",
            0,
        ),
        Document::new(
            "rag.txt",
            "Retrieval-augmented generation combines a retrieval step with a language \
             model. Relevant chunks are retrieved and fed to the model as context.",
            1,
        ),
    ];
    let index = pipeline.build_index(&documents).await?;
    println!("Indexed {} chunks from {} documents", index.len(), documents.len());

    // -- 4. Serve questions ------------------------------------------------
    let service = AnswerService::new(pipeline, index);

    for question in ["What is Rust?", "How does retrieval-augmented generation work?"] {
        let response = service.answer(question).await;
        println!("\nQ: {question}");
        println!("A: {}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
