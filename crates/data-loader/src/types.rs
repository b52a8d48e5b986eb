//! Core domain types for the movie catalog.
//!
//! The catalog is made of three flat collections (movies, cast appearances
//! and crew appearances) joined by `MovieId`. The `Catalog` struct that owns
//! them, together with its lookup indices, lives at the bottom of this file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A movie with its release metadata and genre flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// `None` when the dataset has no (or an unparseable) release date
    pub release_date: Option<NaiveDate>,
    pub popularity: f64,
    pub vote_count: u32,
    pub vote_average: f64,
    /// Absolute box office revenue, `None` when unknown
    pub revenue: Option<f64>,
    /// Revenue divided by budget, `None` when the budget is unknown
    #[serde(rename = "return")]
    pub return_ratio: Option<f64>,
    /// One entry per genre column of the dataset
    pub genre_flags: BTreeMap<String, bool>,
}

impl Movie {
    /// Convenience constructor used by tests and tools that build catalogs
    /// in memory. Numeric fields start at zero and there are no genre flags.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            popularity: 0.0,
            vote_count: 0,
            vote_average: 0.0,
            revenue: None,
            return_ratio: None,
            genre_flags: BTreeMap::new(),
        }
    }

    /// Set a single genre flag (builder style)
    pub fn with_genre(mut self, genre: impl Into<String>, flag: bool) -> Self {
        self.genre_flags.insert(genre.into(), flag);
        self
    }

    /// Set the release date (builder style)
    pub fn released(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    /// Whether the movie is flagged with `genre`. Unknown genres are `false`.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre_flags.get(genre).copied().unwrap_or(false)
    }
}

// =============================================================================
// Appearances
// =============================================================================

/// One actor credited in one movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastAppearance {
    pub movie_id: MovieId,
    pub actor_name: String,
}

/// One crew member credited in one movie, with their job ("Director", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAppearance {
    pub movie_id: MovieId,
    pub person_name: String,
    pub job: String,
}

// =============================================================================
// Catalog - the read-only in-memory store
// =============================================================================

/// Holds the three collections and the indices built over them.
///
/// A `Catalog` is built once (see `Catalog::new` and
/// `Catalog::load_from_files`) and never mutated afterwards, so it can be
/// shared across threads behind an `Arc` without any locking.
///
/// All indices store row positions into the owning vectors, so lookups hand
/// out borrows of the original rows instead of copies.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) cast: Vec<CastAppearance>,
    pub(crate) crew: Vec<CrewAppearance>,

    /// MovieId -> row in `movies`
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Normalized title -> first row in load order
    pub(crate) title_index: HashMap<String, usize>,
    /// Title exactly as stored -> first row in load order
    pub(crate) exact_title_index: HashMap<String, usize>,
    /// Normalized actor name -> rows in `cast`
    pub(crate) actor_index: HashMap<String, Vec<usize>>,
    /// (normalized person name, normalized job) -> rows in `crew`
    pub(crate) crew_index: HashMap<(String, String), Vec<usize>>,

    /// Genre columns present on the movies, in first-seen order
    pub(crate) genre_columns: Vec<String>,
}

/// Normalize a name or title for lookups: trim surrounding whitespace and
/// lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
