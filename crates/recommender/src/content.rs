//! Content-based recommendations: rank the catalog by genre similarity to a
//! reference movie.

use crate::genre_matrix::{GenreMatrix, REFERENCE_GENRES};
use crate::similarity::CosineSimilarity;
use crate::traits::SimilarityMeasure;
use data_loader::{Catalog, MovieId};
use queries::QueryError;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Number of titles returned by `recommend` unless configured otherwise
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub similarity: f32,
}

/// Recommends movies that share genres with a reference movie.
///
/// The genre matrix is built once, when the recommender is created. If the
/// catalog carries none of the vocabulary genres the recommender still
/// constructs, but every call answers with `QueryError::Configuration`.
#[derive(Clone)]
pub struct ContentRecommender {
    catalog: Arc<Catalog>,
    vocabulary: Vec<String>,
    matrix: Result<Arc<GenreMatrix>, QueryError>,
    measure: Arc<dyn SimilarityMeasure>,
    top_k: usize,
}

impl ContentRecommender {
    /// Create a recommender over the reference genre vocabulary, scoring
    /// with cosine similarity
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let vocabulary: Vec<String> = REFERENCE_GENRES.iter().map(|g| g.to_string()).collect();
        let matrix = Self::build_matrix(&catalog, &vocabulary);
        Self {
            catalog,
            vocabulary,
            matrix,
            measure: Arc::new(CosineSimilarity),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Use a different genre vocabulary (rebuilds the matrix)
    pub fn with_vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = vocabulary.into_iter().map(Into::into).collect();
        self.matrix = Self::build_matrix(&self.catalog, &self.vocabulary);
        self
    }

    /// Configure how many titles to return (default: 5)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Score with a different similarity measure
    pub fn with_measure(mut self, measure: impl SimilarityMeasure + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    fn build_matrix(catalog: &Catalog, vocabulary: &[String]) -> Result<Arc<GenreMatrix>, QueryError> {
        match GenreMatrix::build(catalog, vocabulary) {
            Ok(matrix) => {
                debug!(
                    "Built genre matrix: {} rows x {} genres {:?}",
                    matrix.len(),
                    matrix.active_genres().len(),
                    matrix.active_genres()
                );
                Ok(Arc::new(matrix))
            }
            Err(e) => {
                warn!("Genre recommendations unavailable: {}", e);
                Err(e)
            }
        }
    }

    /// Genres the recommender compares on, `None` when unconfigured
    pub fn active_genres(&self) -> Option<&[String]> {
        self.matrix.as_ref().ok().map(|m| m.active_genres())
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Titles of the movies most similar to `title`, best first.
    ///
    /// `title` is matched exactly (case-sensitive). The reference movie is
    /// never part of the result.
    pub fn recommend(&self, title: &str) -> Result<Vec<String>, QueryError> {
        Ok(self
            .recommend_scored(title)?
            .into_iter()
            .map(|r| r.title)
            .collect())
    }

    /// Like `recommend`, with ids and similarity scores.
    ///
    /// ## Algorithm
    /// 1. Resolve the reference row by exact title (first in load order)
    /// 2. Score every row against it in parallel
    /// 3. Stable sort by similarity descending, so ties keep catalog order
    /// 4. Skip the reference row and any other movie with the same title
    /// 5. Take the top `top_k`
    #[instrument(skip(self), fields(measure = self.measure.name()))]
    pub fn recommend_scored(&self, title: &str) -> Result<Vec<Recommendation>, QueryError> {
        let matrix = self.matrix.as_ref().map_err(Clone::clone)?;
        let (reference_row, reference) = self
            .catalog
            .movie_by_exact_title(title)
            .ok_or_else(|| QueryError::not_found("Movie", title))?;
        let query = matrix.row(reference_row).ok_or_else(|| {
            QueryError::Configuration(format!(
                "genre matrix has {} rows, no row {} for {:?}",
                matrix.len(),
                reference_row,
                title
            ))
        })?;

        let mut scored: Vec<(usize, f32)> = matrix
            .rows()
            .par_iter()
            .enumerate()
            .map(|(row, vector)| (row, self.measure.similarity(query, vector)))
            .collect();
        // total_cmp keeps the order total even if a measure yields NaN
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let movies = self.catalog.movies();
        let recommendations: Vec<Recommendation> = scored
            .into_iter()
            .filter(|&(row, _)| row != reference_row && movies[row].title != reference.title)
            .take(self.top_k)
            .map(|(row, similarity)| Recommendation {
                movie_id: movies[row].id,
                title: movies[row].title.clone(),
                similarity,
            })
            .collect();

        debug!(
            "Ranked {} movies, returning {}",
            matrix.len(),
            recommendations.len()
        );
        Ok(recommendations)
    }
}
