//! # Baseline vs RAG Comparison Example
//!
//! Mirrors the batch-evaluation flow end to end: load a QA dataset, index a
//! document corpus, evaluate the baseline condition (generation alone) and
//! the retrieval-augmented condition, and print both mean scores.
//!
//! Run: `cargo run --example compare_conditions`

use std::sync::Arc;

use ragmark_core::{
    Document, FixedSizeChunker, HashingEmbedder, MockGeneration, RagConfig, RagPipeline,
};
use ragmark_eval::{load_qa_dataset, Evaluator};

const QA_CSV: &str = "\
question,answer
What does the 5G standard define?,a cellular mobile network
What are mitochondria?,the powerhouse of the cell
What carves glacial valleys?,slow-moving glaciers
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // -- 1. Load the labeled dataset ---------------------------------------
    let temp = tempfile::tempdir()?;
    let dataset_path = temp.path().join("qa_dataset.csv");
    std::fs::write(&dataset_path, QA_CSV)?;
    let dataset = load_qa_dataset(&dataset_path)?;
    println!("Loaded {} QA records", dataset.len());

    // -- 2. The document corpus the RAG condition retrieves from -----------
    let documents = vec![
        Document::new("net.txt", "The 5G standard defines a cellular mobile network.", 0),
        Document::new("bio.txt", "Mitochondria are the powerhouse of the cell.", 1),
        Document::new("geo.txt", "Slow-moving glaciers carve glacial valleys over millennia.", 2),
    ];

    // -- 3. Build the pipeline with keyless components ----------------------
    // MockGeneration has no canned answers here: the baseline condition
    // always answers "I don't know.", while the RAG condition echoes the
    // most similar retrieved chunk.
    let config = RagConfig::builder().chunk_size(200).chunk_overlap(40).top_k(2).build()?;
    let pipeline = Arc::new(
        RagPipeline::builder()
            .config(config.clone())
            .embedding_provider(Arc::new(HashingEmbedder::new(256)))
            .generation_provider(Arc::new(MockGeneration::new()))
            .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)))
            .build()?,
    );

    // -- 4. Evaluate both conditions ----------------------------------------
    let evaluator = Evaluator::new(pipeline).with_concurrency(4);
    let comparison = evaluator.compare(&dataset, &documents).await?;

    // -- 5. Report -----------------------------------------------------------
    println!("\n--- Evaluation Results ---");
    println!(
        "Baseline: mean score {:.3} ({} failures)",
        comparison.baseline.mean_score(),
        comparison.baseline.failure_count,
    );
    println!(
        "RAG:      mean score {:.3} ({} failures)",
        comparison.rag.mean_score(),
        comparison.rag.failure_count,
    );

    for (record, (baseline, rag)) in dataset
        .iter()
        .zip(comparison.baseline.scores.iter().zip(comparison.rag.scores.iter()))
    {
        println!("  {:<42} baseline={:.3} rag={:.3}", record.question, baseline.score, rag.score);
    }

    Ok(())
}
