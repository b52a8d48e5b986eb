//! The genre feature matrix: one binary row per movie, one column per
//! active genre.

use data_loader::Catalog;
use queries::QueryError;

/// Genres the recommender knows how to compare on, by default
pub const REFERENCE_GENRES: [&str; 4] = ["Action", "Adventure", "Animation", "Comedy"];

/// Binary genre vectors for every movie in catalog order.
///
/// Row `i` belongs to `catalog.movies()[i]`; column `j` to
/// `active_genres()[j]`.
#[derive(Debug, Clone)]
pub struct GenreMatrix {
    active_genres: Vec<String>,
    rows: Vec<Vec<f32>>,
}

impl GenreMatrix {
    /// Build the matrix for `catalog` over the genres of `vocabulary` that
    /// the catalog actually carries.
    ///
    /// Fails with `QueryError::Configuration` when none of them do.
    pub fn build<S: AsRef<str>>(catalog: &Catalog, vocabulary: &[S]) -> Result<Self, QueryError> {
        let columns = catalog.genre_columns();
        let active_genres: Vec<String> = vocabulary
            .iter()
            .map(|genre| genre.as_ref())
            .filter(|genre| columns.iter().any(|c| c == genre))
            .map(str::to_string)
            .collect();

        if active_genres.is_empty() {
            return Err(QueryError::Configuration(format!(
                "none of the genres [{}] are present in the catalog",
                vocabulary
                    .iter()
                    .map(|g| g.as_ref())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        let rows = catalog
            .movies()
            .iter()
            .map(|movie| {
                active_genres
                    .iter()
                    .map(|genre| if movie.has_genre(genre) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        Ok(Self {
            active_genres,
            rows,
        })
    }

    pub fn active_genres(&self) -> &[String] {
        &self.active_genres
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
