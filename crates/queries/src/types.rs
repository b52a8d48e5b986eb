//! Result records returned by the query engine.

use serde::Serialize;

/// Release year and popularity of a title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleScore {
    pub title: String,
    /// `None` when the movie has no release date
    pub release_year: Option<i32>,
    pub popularity: f64,
}

/// Vote statistics of a title that met the vote threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleVotes {
    pub title: String,
    pub vote_count: u32,
    pub vote_average: f64,
}

/// Revenue rollup over an actor's appearances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    pub actor_name: String,
    pub movie_count: usize,
    pub total_revenue: f64,
    pub average_revenue_per_movie: f64,
}

/// Return (revenue/budget) rollup over the movies a person directed.
/// Totals are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorSummary {
    pub director_name: String,
    pub movie_count: usize,
    pub total_return: f64,
    pub average_return_per_movie: f64,
}
