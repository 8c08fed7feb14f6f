//! Property tests for vector index query ordering and length.

use std::collections::HashMap;

use proptest::prelude::*;
use ragmark_core::document::Chunk;
use ragmark_core::index::{DistanceMetric, VectorIndex};

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map("non-zero embedding", |mut v| {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm < 1e-8 {
            return None;
        }
        for val in &mut v {
            *val /= norm;
        }
        Some(v)
    })
}

fn chunk(seq: usize) -> Chunk {
    Chunk {
        id: format!("doc#{seq}"),
        text: format!("chunk {seq}"),
        seq,
        document_id: "doc".to_string(),
        metadata: HashMap::new(),
    }
}

/// For any set of indexed embeddings and any valid k, querying returns
/// exactly `min(k, index_len)` hits ordered by ascending distance, under
/// both metrics.
mod prop_query_ordering_and_length {
    use super::*;

    const DIM: usize = 16;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn hits_ascend_and_len_is_min_of_k_and_index_size(
            embeddings in proptest::collection::vec(arb_normalized_embedding(DIM), 1..20),
            query in arb_normalized_embedding(DIM),
            k in 1usize..25,
            cosine in any::<bool>(),
        ) {
            let metric = if cosine { DistanceMetric::Cosine } else { DistanceMetric::Euclidean };
            let chunks: Vec<Chunk> = (0..embeddings.len()).map(chunk).collect();
            let index_len = chunks.len();

            let index = VectorIndex::build(chunks, embeddings, metric).unwrap();
            let hits = index.query(&query, k).unwrap();

            prop_assert_eq!(hits.len(), k.min(index_len));

            for window in hits.windows(2) {
                prop_assert!(
                    window[0].distance <= window[1].distance,
                    "hits not in ascending order: {} > {}",
                    window[0].distance,
                    window[1].distance,
                );
            }
        }
    }
}
