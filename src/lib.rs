//! # catalogo
//!
//! Reads a product catalog published as an Atom feed, sorts each product
//! into a category by its title, and answers simple queries over it.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher (retry) → Normalizer → Classifier → Catalog queries
//! ```
//!
//! Nothing is cached: every query fetches and decodes the feed again.
//!
//! ## Quick Start
//!
//! ```bash
//! # Every product
//! catalogo products
//!
//! # Search titles and summaries
//! catalogo search licuadora
//!
//! # Categories and their products
//! catalogo categories
//! catalogo category laptops --json
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration, fetcher
/// and catalog together. [`CatalogError`](app::CatalogError) is the error
/// every operation returns.
pub mod app;

/// Remote catalog and its queries.
///
/// - [`Catalog`](catalog::Catalog): fetch, decode and query in one call
/// - [`query`](catalog::query): list, search, index and category filters
pub mod catalog;

/// Title keyword rules assigning a [`Category`](classifier::Category).
pub mod classifier;

/// Command-line interface using clap.
pub mod cli;

/// Configuration file handling.
///
/// Loads from `~/.config/catalogo/config.toml`.
pub mod config;

/// Core domain model: [`Product`](domain::Product).
pub mod domain;

/// HTTP fetching with bounded retries on timeout.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for one fetch attempt
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`fetch_with_retry`](fetcher::fetch_with_retry): the retry loop
pub mod fetcher;

/// Feed parsing and normalization into [`Product`](domain::Product)s.
pub mod normalizer;
