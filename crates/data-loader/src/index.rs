//! Catalog building and lookup logic.
//!
//! `Catalog::new` takes the three already-parsed collections and builds every
//! index once; `Catalog::load_from_files` is the file-based entry point that
//! parses a dataset directory in parallel and then calls `new`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Build a catalog from parsed collections.
    ///
    /// Fails with `DuplicateId` if two movies share an id. Cast and crew rows
    /// pointing at unknown movies are kept; queries simply find no movie to
    /// join them with.
    pub fn new(
        movies: Vec<Movie>,
        cast: Vec<CastAppearance>,
        crew: Vec<CrewAppearance>,
    ) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(movies.len());
        let mut title_index = HashMap::with_capacity(movies.len());
        let mut exact_title_index = HashMap::with_capacity(movies.len());
        let mut genre_columns: Vec<String> = Vec::new();

        for (row, movie) in movies.iter().enumerate() {
            if id_index.insert(movie.id, row).is_some() {
                return Err(DataLoadError::DuplicateId { id: movie.id });
            }
            // First row in load order wins for duplicate titles
            title_index.entry(normalize(&movie.title)).or_insert(row);
            exact_title_index.entry(movie.title.clone()).or_insert(row);

            for genre in movie.genre_flags.keys() {
                if !genre_columns.contains(genre) {
                    genre_columns.push(genre.clone());
                }
            }
        }

        let mut actor_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (row, entry) in cast.iter().enumerate() {
            actor_index
                .entry(normalize(&entry.actor_name))
                .or_default()
                .push(row);
        }

        let mut crew_index: HashMap<(String, String), Vec<usize>> = HashMap::new();
        for (row, entry) in crew.iter().enumerate() {
            crew_index
                .entry((normalize(&entry.person_name), normalize(&entry.job)))
                .or_default()
                .push(row);
        }

        let catalog = Self {
            movies,
            cast,
            crew,
            id_index,
            title_index,
            exact_title_index,
            actor_index,
            crew_index,
            genre_columns,
        };
        catalog.report_dangling_references();
        Ok(catalog)
    }

    /// Load the dataset from a directory holding movies.dat, cast.dat and
    /// crew.dat.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", data_dir);

        let movies_path = data_dir.join(parser::MOVIES_FILE);
        let cast_path = data_dir.join(parser::CAST_FILE);
        let crew_path = data_dir.join(parser::CREW_FILE);

        // Parse all three files in parallel
        let ((movies, cast), crew) = rayon::join(
            || {
                rayon::join(
                    || parser::read_file(&movies_path).and_then(|c| parser::parse_movies(&c)),
                    || parser::read_file(&cast_path).and_then(|c| parser::parse_cast(&c)),
                )
            },
            || parser::read_file(&crew_path).and_then(|c| parser::parse_crew(&c)),
        );

        let movies = movies?;
        let cast = cast?;
        let crew = crew?;

        info!(
            "Parsed {} movies, {} cast entries, {} crew entries",
            movies.len(),
            cast.len(),
            crew.len()
        );

        let catalog = Self::new(movies, cast, crew)?;
        info!(
            "Catalog indexed ({} genre columns: {:?})",
            catalog.genre_columns.len(),
            catalog.genre_columns
        );
        Ok(catalog)
    }

    fn report_dangling_references(&self) {
        let dangling_cast = self
            .cast
            .iter()
            .filter(|c| !self.id_index.contains_key(&c.movie_id))
            .count();
        let dangling_crew = self
            .crew
            .iter()
            .filter(|c| !self.id_index.contains_key(&c.movie_id))
            .count();
        if dangling_cast > 0 || dangling_crew > 0 {
            warn!(
                "{} cast and {} crew entries reference unknown movies",
                dangling_cast, dangling_crew
            );
        }
    }

    // Lookups - all return borrows into the stored collections

    /// Get a movie by ID
    pub fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&row| &self.movies[row])
    }

    /// Find a movie by title, ignoring case and surrounding whitespace.
    ///
    /// When several movies share a normalized title the first one in load
    /// order is returned.
    pub fn movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.title_index
            .get(&normalize(title))
            .map(|&row| &self.movies[row])
    }

    /// Find a movie by its title exactly as stored (case-sensitive), along
    /// with its row position. First in load order wins.
    pub fn movie_by_exact_title(&self, title: &str) -> Option<(usize, &Movie)> {
        self.exact_title_index
            .get(title)
            .map(|&row| (row, &self.movies[row]))
    }

    /// All cast entries for an actor, in load order
    pub fn cast_entries_by_actor(&self, name: &str) -> Vec<&CastAppearance> {
        self.actor_index
            .get(&normalize(name))
            .map(|rows| rows.iter().map(|&row| &self.cast[row]).collect())
            .unwrap_or_default()
    }

    /// All crew entries for a person with the given job, in load order
    pub fn crew_entries_by_person_and_job(&self, name: &str, job: &str) -> Vec<&CrewAppearance> {
        self.crew_index
            .get(&(normalize(name), normalize(job)))
            .map(|rows| rows.iter().map(|&row| &self.crew[row]).collect())
            .unwrap_or_default()
    }

    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Genre columns present on the movies, in first-seen order
    pub fn genre_columns(&self) -> &[String] {
        &self.genre_columns
    }

    /// Get counts for debugging/validation: (movies, cast, crew)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.cast.len(), self.crew.len())
    }
}
