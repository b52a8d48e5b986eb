//! Content-based movie recommendations.
//!
//! This crate provides:
//! - GenreMatrix: binary genre vectors for every movie over the active genres
//! - SimilarityMeasure trait and the CosineSimilarity implementation
//! - ContentRecommender: ranks the catalog against a reference title
//!
//! ## Example Usage
//! ```ignore
//! use recommender::ContentRecommender;
//!
//! let recommender = ContentRecommender::new(catalog.clone());
//! let titles = recommender.recommend("Toy Story")?;
//! ```
//!
//! Similarity is computed on demand. Each call is O(n * g) for n movies and
//! g active genres, which is fine without pre-indexing because genre vectors
//! are short.

pub mod content;
pub mod genre_matrix;
pub mod similarity;
pub mod traits;

pub use content::{ContentRecommender, Recommendation, DEFAULT_TOP_K};
pub use genre_matrix::{GenreMatrix, REFERENCE_GENRES};
pub use similarity::CosineSimilarity;
pub use traits::SimilarityMeasure;
