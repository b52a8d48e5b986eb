//! Server crate for the movie catalog.
//!
//! This crate contains the request service that sits between an outer
//! adapter (the CLI, or any transport) and the query and recommendation
//! engines.

pub mod service;

pub use service::{describe_outcome, CatalogService, Request, Response};
