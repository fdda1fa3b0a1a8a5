//! Core library for ratehub
//!
//! This crate implements the **Functional Core** of the ratehub application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! ratehub builds a ranked, rated catalog out of issues and comments stored in
//! an issue tracker. There is no backend: every read recomputes the catalog
//! from the tracker. The project is split in two crates:
//!
//! - **`ratehub_core`** (this crate): Pure transformation functions with zero I/O
//! - **`ratehub`**: HTTP transport, pagination loop, orchestration and CLI (the Imperative Shell)
//!
//! All functions in this crate are deterministic and can be tested with plain
//! fixture data. Malformed input (missing front matter, bogus rating markers)
//! degrades to "no data" instead of an error; the only error type here is
//! [`config::ConfigError`].
//!
//! # Module Organization
//!
//! - [`config`]: Hub configuration, validation and URL building
//! - [`pagination`]: `Link` header parsing for following continuation pages
//! - [`github`]: Issue tracker API response types
//! - [`front_matter`]: Lenient parser for metadata blocks in issue bodies
//! - [`item`]: Issue → catalog item transformation
//! - [`rating`]: Rating markers, latest-per-author aggregation, thread display
//! - [`ranking`]: Recency and quality orderings
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use ratehub_core::item::{extract_item, transform_comments};
//! use ratehub_core::rating::aggregate_ratings;
//! use ratehub_core::ranking::{rank_by_quality, RatedItem};
//!
//! let items: Vec<_> = issues.iter().map(extract_item).collect();
//! let rated: Vec<RatedItem> = items
//!     .into_iter()
//!     .zip(&comments_per_issue)
//!     .map(|(item, comments)| {
//!         let stats = aggregate_ratings(&transform_comments(comments)).stat;
//!         RatedItem::new(item, Some(stats))
//!     })
//!     .collect();
//!
//! let top = rank_by_quality(&rated, 5);
//! ```

pub mod config;
pub mod front_matter;
pub mod github;
pub mod item;
pub mod pagination;
pub mod ranking;
pub mod rating;
