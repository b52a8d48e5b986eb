//! # Data Loader Crate
//!
//! This crate holds the read-only movie catalog: the domain types, the
//! `.dat` file parser and the `Catalog` store with its lookup indices.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, CastAppearance, CrewAppearance, Catalog)
//! - **parser**: Parse .dat files into Rust structs
//! - **index**: Build the catalog indices and answer lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/catalog"))?;
//!
//! let movie = catalog.movie_by_title("toy story").unwrap();
//! let roles = catalog.cast_entries_by_actor("Tom Hanks");
//! println!("{} ({} cast entries for Tom Hanks)", movie.title, roles.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use types::{normalize, CastAppearance, Catalog, CrewAppearance, Movie, MovieId};
