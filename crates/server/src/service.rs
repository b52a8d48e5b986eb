//! # Catalog Service
//!
//! Dispatches one typed request to the core engines and hands back the
//! structured result:
//! 1. The adapter builds a `Request` from its own input format
//! 2. `dispatch` runs it on a blocking worker (the engines are CPU-bound)
//! 3. The adapter renders the `Response`, or the `QueryError` outcome via
//!    `describe_outcome`
//!
//! The service holds only shared handles to immutable state, so clones are
//! cheap and any number of requests can run at once.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use data_loader::Catalog;
use queries::{
    ActorSummary, DirectorSummary, QueryEngine, QueryError, TitleScore, TitleVotes,
};
use recommender::{ContentRecommender, Recommendation};

/// A single query against the catalog, with already-parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CountByMonth(String),
    CountByWeekday(String),
    Score(String),
    Votes(String),
    Actor(String),
    Director(String),
    Recommend(String),
}

impl Request {
    /// Short name of the request kind, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Request::CountByMonth(_) => "count_by_month",
            Request::CountByWeekday(_) => "count_by_weekday",
            Request::Score(_) => "score",
            Request::Votes(_) => "votes",
            Request::Actor(_) => "actor",
            Request::Director(_) => "director",
            Request::Recommend(_) => "recommend",
        }
    }
}

/// Successful result of a `Request`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Response {
    ReleaseCount { period: String, count: usize },
    Score(TitleScore),
    Votes(TitleVotes),
    Actor(ActorSummary),
    Director(DirectorSummary),
    Recommendations {
        reference: String,
        items: Vec<Recommendation>,
    },
}

impl Response {
    /// One-line human readable rendering
    pub fn summary(&self) -> String {
        match self {
            Response::ReleaseCount { period, count } => {
                format!("{} movies were released in/on {}", count, period)
            }
            Response::Score(score) => format!(
                "{} ({}) has a popularity score of {}",
                score.title,
                score
                    .release_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "unknown year".to_string()),
                score.popularity
            ),
            Response::Votes(votes) => format!(
                "{} has {} votes with an average of {}",
                votes.title, votes.vote_count, votes.vote_average
            ),
            Response::Actor(actor) => format!(
                "{} appeared in {} movies with a total revenue of {} and an average of {} per movie",
                actor.actor_name,
                actor.movie_count,
                actor.total_revenue,
                actor.average_revenue_per_movie
            ),
            Response::Director(director) => format!(
                "{} achieved a total return of {:.2} with an average of {:.2} per movie",
                director.director_name,
                director.total_return,
                director.average_return_per_movie
            ),
            Response::Recommendations { reference, items } => format!(
                "Movies similar to {}: {}",
                reference,
                items
                    .iter()
                    .map(|r| r.title.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// User-facing message for a non-success outcome
pub fn describe_outcome(outcome: &QueryError) -> String {
    match outcome {
        QueryError::NotFound { entity, name } => {
            format!("{} '{}' was not found in the catalog", entity, name)
        }
        QueryError::InvalidArgument { argument, value } => match argument.as_str() {
            "month" => format!("'{}' is not a valid month; use a Spanish month name", value),
            "weekday" => format!("'{}' is not a valid day; use a Spanish weekday name", value),
            _ => format!("Invalid {}: '{}'", argument, value),
        },
        QueryError::Ineligible {
            title, threshold, ..
        } => format!("{} does not reach the minimum of {} votes", title, threshold),
        QueryError::Configuration(reason) => {
            format!("Recommendations are unavailable for this dataset: {}", reason)
        }
    }
}

/// Routes requests to the query engine or the recommender
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    engine: QueryEngine,
    recommender: ContentRecommender,
}

impl CatalogService {
    /// Create a service with default-configured engines over `catalog`
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let engine = QueryEngine::new(catalog.clone());
        let recommender = ContentRecommender::new(catalog.clone());
        Self {
            catalog,
            engine,
            recommender,
        }
    }

    /// Replace the query engine (e.g. one with a custom vote threshold)
    pub fn with_engine(mut self, engine: QueryEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the recommender (e.g. one with a custom top-k)
    pub fn with_recommender(mut self, recommender: ContentRecommender) -> Self {
        self.recommender = recommender;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn recommender(&self) -> &ContentRecommender {
        &self.recommender
    }

    /// Run a request on the calling thread
    pub fn handle(&self, request: &Request) -> std::result::Result<Response, QueryError> {
        match request {
            Request::CountByMonth(month) => Ok(Response::ReleaseCount {
                period: month.trim().to_string(),
                count: self.engine.count_by_release_month(month)?,
            }),
            Request::CountByWeekday(day) => Ok(Response::ReleaseCount {
                period: day.trim().to_string(),
                count: self.engine.count_by_release_weekday(day)?,
            }),
            Request::Score(title) => self.engine.score_for_title(title).map(Response::Score),
            Request::Votes(title) => self.engine.votes_for_title(title).map(Response::Votes),
            Request::Actor(name) => self.engine.actor_summary(name).map(Response::Actor),
            Request::Director(name) => self.engine.director_summary(name).map(Response::Director),
            Request::Recommend(title) => Ok(Response::Recommendations {
                reference: title.clone(),
                items: self.recommender.recommend_scored(title)?,
            }),
        }
    }

    /// Run a request on tokio's blocking pool.
    ///
    /// The outer `Result` only fails if the worker task panicked or was
    /// cancelled; query outcomes come back in the inner one.
    pub async fn dispatch(
        &self,
        request: Request,
    ) -> Result<std::result::Result<Response, QueryError>> {
        let start = Instant::now();
        let kind = request.kind();

        let service = self.clone();
        let outcome = tokio::task::spawn_blocking(move || service.handle(&request))
            .await
            .context("Request task panicked")?;

        info!(
            "Handled {} request in {:.2?} ({})",
            kind,
            start.elapsed(),
            match &outcome {
                Ok(_) => "ok",
                Err(e) if e.is_failure() => "failed",
                Err(_) => "ineligible",
            }
        );
        Ok(outcome)
    }
}
