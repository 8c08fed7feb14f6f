//! Answer scoring strategies.
//!
//! A scorer compares a generated answer against the reference answer and
//! produces a value in `[0.0, 1.0]`, higher is better, deterministic for
//! fixed inputs. The harness treats the scorer as a pluggable strategy;
//! only that output contract is fixed.

/// A strategy for scoring a generated answer against the reference.
pub trait AnswerScorer: Send + Sync {
    /// Score `generated` against `reference`; bounded to `[0.0, 1.0]`,
    /// higher is better, `1.0` for a perfect match.
    fn score(&self, generated: &str, reference: &str) -> f32;
}

/// Lowercased alphanumeric tokens of a text.
fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Token-overlap F1 between the generated and reference answers.
///
/// Precision is the fraction of generated tokens found in the reference,
/// recall the fraction of reference tokens found in the generation
/// (multiset semantics: a token matches at most as often as it occurs on
/// the other side). F1 is their harmonic mean. Identical token sequences
/// score exactly `1.0`; disjoint vocabulary scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenF1Scorer;

impl AnswerScorer for TokenF1Scorer {
    fn score(&self, generated: &str, reference: &str) -> f32 {
        let generated = tokens(generated);
        let reference = tokens(reference);

        if generated.is_empty() && reference.is_empty() {
            return 1.0;
        }
        if generated.is_empty() || reference.is_empty() {
            return 0.0;
        }

        let mut counts = std::collections::HashMap::<&str, usize>::new();
        for token in &reference {
            *counts.entry(token).or_default() += 1;
        }
        let mut overlap = 0usize;
        for token in &generated {
            if let Some(count) = counts.get_mut(token.as_str()) {
                if *count > 0 {
                    *count -= 1;
                    overlap += 1;
                }
            }
        }

        if overlap == 0 {
            return 0.0;
        }
        let precision = overlap as f32 / generated.len() as f32;
        let recall = overlap as f32 / reference.len() as f32;
        2.0 * precision * recall / (precision + recall)
    }
}

/// Binary exact match over normalised tokens: `1.0` or `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchScorer;

impl AnswerScorer for ExactMatchScorer {
    fn score(&self, generated: &str, reference: &str) -> f32 {
        if tokens(generated) == tokens(reference) { 1.0 } else { 0.0 }
    }
}
