//! Core traits for the recommendation engine.

/// A similarity measure between two genre vectors of equal length.
///
/// ## Design Note
/// - `Send + Sync` so the recommender can score rows from rayon workers
/// - Implementations should return a finite value for every input, including
///   all-zero vectors. A NaN still ranks deterministically (above every
///   finite score)
pub trait SimilarityMeasure: Send + Sync {
    /// Returns the name of this measure (for logging/debugging)
    fn name(&self) -> &str;

    /// Similarity of `a` and `b`; larger means more alike
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32;
}
