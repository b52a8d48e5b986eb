//! Title lookups: popularity score and vote statistics.

use crate::engine::QueryEngine;
use crate::error::QueryError;
use crate::types::{TitleScore, TitleVotes};
use chrono::Datelike;
use data_loader::Movie;
use tracing::{debug, instrument};

impl QueryEngine {
    fn find_title(&self, title: &str) -> Result<&Movie, QueryError> {
        self.catalog
            .movie_by_title(title)
            .ok_or_else(|| QueryError::not_found("Movie", title))
    }

    /// Release year and popularity for a title
    #[instrument(skip(self))]
    pub fn score_for_title(&self, title: &str) -> Result<TitleScore, QueryError> {
        let movie = self.find_title(title)?;
        Ok(TitleScore {
            title: movie.title.clone(),
            release_year: movie.release_date.map(|date| date.year()),
            popularity: movie.popularity,
        })
    }

    /// Vote count and average for a title.
    ///
    /// Titles with fewer votes than the configured threshold are reported as
    /// `Ineligible` instead.
    #[instrument(skip(self))]
    pub fn votes_for_title(&self, title: &str) -> Result<TitleVotes, QueryError> {
        let movie = self.find_title(title)?;
        if movie.vote_count < self.vote_threshold {
            debug!(
                "'{}' has {} votes (threshold {})",
                movie.title, movie.vote_count, self.vote_threshold
            );
            return Err(QueryError::Ineligible {
                title: movie.title.clone(),
                vote_count: movie.vote_count,
                threshold: self.vote_threshold,
            });
        }
        Ok(TitleVotes {
            title: movie.title.clone(),
            vote_count: movie.vote_count,
            vote_average: movie.vote_average,
        })
    }
}
