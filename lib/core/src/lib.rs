//! # bookwise Core
//!
//! Core library for the bookwise recommendation engine.
//!
//! This crate provides the fundamental data structures and the lookup:
//!
//! - [`TitleIndex`] - Ordered registry of unique titles with O(1) row lookup
//! - [`SimilarityMatrix`] - Precomputed N x N item-item similarity scores
//! - [`Catalog`] - Display attributes (author, cover image) keyed by title
//! - [`PopularityTable`] - Pre-ranked "most popular" listing
//! - [`Recommender`] - Validated lookup over all of the above
//!
//! ## Example
//!
//! ```rust
//! use bookwise_core::{Catalog, CatalogEntry, Recommender, SimilarityMatrix, TitleIndex};
//!
//! let index = TitleIndex::new(vec!["Dune".to_string(), "Hyperion".to_string()]).unwrap();
//! let matrix = SimilarityMatrix::new(2, vec![1.0, 0.7, 0.7, 1.0]).unwrap();
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("Dune", "Frank Herbert", "dune.jpg"),
//!     CatalogEntry::new("Hyperion", "Dan Simmons", "hyperion.jpg"),
//! ]);
//!
//! let recommender = Recommender::new(index, matrix, catalog).unwrap();
//! let results = recommender.recommend("Dune").unwrap();
//! assert_eq!(results[0].title, "Hyperion");
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod matrix;
pub mod popular;
pub mod recommend;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use index::TitleIndex;
pub use matrix::SimilarityMatrix;
pub use popular::{PopularityTable, MAX_POPULAR};
pub use recommend::{Recommendation, Recommender, DEFAULT_RECOMMENDATIONS};
