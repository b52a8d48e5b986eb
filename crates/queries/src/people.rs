//! Person aggregations: revenue rollups for actors, return rollups for
//! directors.
//!
//! The two summaries deliberately aggregate different measures. Actors are
//! summed over absolute `revenue`, directors over the `return` ratio.

use crate::engine::QueryEngine;
use crate::error::QueryError;
use crate::types::{ActorSummary, DirectorSummary};
use data_loader::MovieId;
use std::collections::HashSet;
use tracing::{debug, instrument};

const DIRECTOR_JOB: &str = "director";

impl QueryEngine {
    /// Revenue totals over every cast entry of an actor.
    ///
    /// Each cast entry that joins to a catalog movie counts once; missing
    /// revenue counts as zero.
    #[instrument(skip(self))]
    pub fn actor_summary(&self, actor_name: &str) -> Result<ActorSummary, QueryError> {
        let entries = self.catalog.cast_entries_by_actor(actor_name);
        if entries.is_empty() {
            return Err(QueryError::not_found("Actor", actor_name));
        }

        let (movie_count, total_revenue) = entries
            .iter()
            .filter_map(|entry| self.catalog.movie_by_id(entry.movie_id))
            .fold((0usize, 0.0f64), |(count, total), movie| {
                (count + 1, total + movie.revenue.unwrap_or(0.0))
            });
        debug!(
            "{} cast entries, {} joined to movies",
            entries.len(),
            movie_count
        );

        Ok(ActorSummary {
            actor_name: entries[0].actor_name.clone(),
            movie_count,
            total_revenue,
            average_revenue_per_movie: average(total_revenue, movie_count),
        })
    }

    /// Return totals over the distinct movies a person directed.
    ///
    /// Missing return counts as zero. Total and average are rounded to two
    /// decimals.
    #[instrument(skip(self))]
    pub fn director_summary(&self, director_name: &str) -> Result<DirectorSummary, QueryError> {
        let entries = self
            .catalog
            .crew_entries_by_person_and_job(director_name, DIRECTOR_JOB);
        if entries.is_empty() {
            return Err(QueryError::not_found("Director", director_name));
        }

        // Distinct ids, kept in load order
        let mut seen: HashSet<MovieId> = HashSet::new();
        let movie_ids: Vec<MovieId> = entries
            .iter()
            .map(|entry| entry.movie_id)
            .filter(|&id| seen.insert(id))
            .collect();
        let (movie_count, total_return) = movie_ids
            .iter()
            .filter_map(|&id| self.catalog.movie_by_id(id))
            .fold((0usize, 0.0f64), |(count, total), movie| {
                (count + 1, total + movie.return_ratio.unwrap_or(0.0))
            });
        debug!(
            "{} distinct movies directed, {} in catalog",
            movie_ids.len(),
            movie_count
        );

        Ok(DirectorSummary {
            director_name: entries[0].person_name.clone(),
            movie_count,
            total_return: round2(total_return),
            average_return_per_movie: round2(average(total_return, movie_count)),
        })
    }
}

/// `total / count`, or 0 when there is nothing to average over
fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{CastAppearance, Catalog, CrewAppearance, Movie};
    use std::sync::Arc;

    fn movie(id: MovieId, revenue: Option<f64>, return_ratio: Option<f64>) -> Movie {
        let mut movie = Movie::new(id, format!("Movie {}", id));
        movie.revenue = revenue;
        movie.return_ratio = return_ratio;
        movie
    }

    fn cast(movie_id: MovieId, name: &str) -> CastAppearance {
        CastAppearance {
            movie_id,
            actor_name: name.to_string(),
        }
    }

    fn crew(movie_id: MovieId, name: &str, job: &str) -> CrewAppearance {
        CrewAppearance {
            movie_id,
            person_name: name.to_string(),
            job: job.to_string(),
        }
    }

    fn create_test_engine() -> QueryEngine {
        let movies = vec![
            movie(1, Some(100.0), Some(2.5)),
            movie(2, None, Some(1.125)),
            movie(3, Some(50.0), None),
        ];
        let cast_entries = vec![
            cast(1, "Tom Hanks"),
            cast(2, "Tom Hanks"),
            cast(3, "tom hanks "),
            cast(99, "Ghost Actor"),
        ];
        let crew_entries = vec![
            crew(1, "Ann Director", "Director"),
            crew(2, "Ann Director", "director"),
            crew(2, "Ann Director", "Director"),
            crew(3, "Ann Director", "Producer"),
            crew(99, "Ghost Director", "Director"),
        ];
        let catalog = Catalog::new(movies, cast_entries, crew_entries).unwrap();
        QueryEngine::new(Arc::new(catalog))
    }

    #[test]
    fn test_actor_summary() {
        let engine = create_test_engine();
        let summary = engine.actor_summary("TOM HANKS").unwrap();
        assert_eq!(summary.actor_name, "Tom Hanks");
        assert_eq!(summary.movie_count, 3);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.average_revenue_per_movie, 50.0);
    }

    #[test]
    fn test_actor_with_no_joined_movies() {
        let engine = create_test_engine();
        let summary = engine.actor_summary("Ghost Actor").unwrap();
        assert_eq!(summary.movie_count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_revenue_per_movie, 0.0);
    }

    #[test]
    fn test_director_summary_uses_distinct_directed_movies() {
        let engine = create_test_engine();
        let summary = engine.director_summary(" ann director").unwrap();
        // Movie 3 was produced, not directed; movie 2 is counted once
        assert_eq!(summary.movie_count, 2);
        assert_eq!(summary.total_return, 3.63);
        assert_eq!(summary.average_return_per_movie, 1.81);
    }

    #[test]
    fn test_director_with_no_joined_movies() {
        let engine = create_test_engine();
        let summary = engine.director_summary("Ghost Director").unwrap();
        assert_eq!(summary.movie_count, 0);
        assert_eq!(summary.average_return_per_movie, 0.0);
    }

    #[test]
    fn test_unknown_people() {
        let engine = create_test_engine();
        assert!(matches!(
            engine.actor_summary("Nobody"),
            Err(QueryError::NotFound { .. })
        ));
        // A producer credit alone does not make a director
        assert!(matches!(
            engine.director_summary("Tom Hanks"),
            Err(QueryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_director_summary_is_stable_across_calls() {
        let movies = vec![
            movie(1, None, Some(5.385)),
            movie(2, None, Some(6.235)),
            movie(3, None, Some(6.125)),
        ];
        let crew_entries = vec![
            crew(1, "D", "Director"),
            crew(2, "D", "Director"),
            crew(3, "D", "Director"),
            crew(2, "D", "Director"),
        ];
        let catalog = Catalog::new(movies, vec![], crew_entries).unwrap();
        let engine = QueryEngine::new(Arc::new(catalog));

        let first = engine.director_summary("D").unwrap();
        assert_eq!(first.movie_count, 3);
        let distinct: HashSet<String> = (0..200)
            .map(|_| {
                let summary = engine.director_summary("D").unwrap();
                format!("{}/{}", summary.total_return, summary.average_return_per_movie)
            })
            .collect();
        assert_eq!(distinct.len(), 1);
        assert_eq!(
            distinct.into_iter().next().unwrap(),
            format!("{}/{}", first.total_return, first.average_return_per_movie)
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(0.0), 0.0);
    }
}
