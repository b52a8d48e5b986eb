//! Similarity measures over genre vectors.

use crate::traits::SimilarityMeasure;

/// Cosine similarity: dot(a, b) / (|a| * |b|).
///
/// Cosine is undefined when either vector is all zeros; this implementation
/// returns 0.0 in that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl SimilarityMeasure for CosineSimilarity {
    fn name(&self) -> &str {
        "cosine"
    }

    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        let (dot, norm_a, norm_b) = a
            .iter()
            .zip(b)
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&x, &y)| {
                (dot + x * y, na + x * x, nb + y * y)
            });
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}
