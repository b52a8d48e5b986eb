//! # Queries Crate
//!
//! Point queries over the movie catalog.
//!
//! ## Components
//!
//! - **calendar**: Spanish month/weekday name tables
//! - **temporal**: release counts by month and weekday
//! - **titles**: popularity score and vote statistics of a title
//! - **people**: actor revenue and director return rollups
//! - **error**: the `QueryError` outcome taxonomy, shared with the recommender
//!
//! ## Example Usage
//!
//! ```ignore
//! use queries::QueryEngine;
//! use data_loader::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_files(Path::new("data/catalog"))?);
//! let engine = QueryEngine::new(catalog);
//!
//! let releases = engine.count_by_release_month("marzo")?;
//! let hanks = engine.actor_summary("Tom Hanks")?;
//! ```
//!
//! All matching trims surrounding whitespace and ignores case. There is no
//! partial or fuzzy matching.

pub mod calendar;
pub mod engine;
pub mod error;
pub mod people;
pub mod temporal;
pub mod titles;
pub mod types;

pub use calendar::{MONTH_NAMES, WEEKDAY_NAMES};
pub use engine::{QueryEngine, DEFAULT_VOTE_THRESHOLD};
pub use error::QueryError;
pub use types::{ActorSummary, DirectorSummary, TitleScore, TitleVotes};
