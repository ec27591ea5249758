//! # bookwise
//!
//! A book recommender serving engine.
//!
//! bookwise serves a precomputed item-item similarity model: given a book
//! title it returns the most similar titles, each with author and cover
//! image, plus a pre-ranked "most popular books" listing. The model itself
//! is trained offline; this process only loads the exported artifacts once
//! at startup and serves lookups from memory.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install bookwise
//! bookwise --artifacts ./artifacts --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use bookwise::prelude::*;
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
//!
//! ## Crate Structure
//!
//! bookwise is composed of several crates:
//!
//! - [`bookwise-core`](https://docs.rs/bookwise-core) - Data model and the similarity lookup
//! - [`bookwise-store`](https://docs.rs/bookwise-store) - Artifact loading and validation
//! - [`bookwise-api`](https://docs.rs/bookwise-api) - REST API
//!
//! ## Features
//!
//! - **O(1) title resolution**: title -> matrix row map built once at load
//! - **Explicit tie-breaking**: equal scores rank by original index, reproducibly
//! - **Fail-fast validation**: artifact inconsistencies abort startup, never a lookup
//! - **Read-only serving**: no locks, safe concurrent lookups

// Re-export core types
pub use bookwise_core::{
    Catalog, CatalogEntry,
    Error, Result,
    PopularityTable, Recommendation, Recommender,
    SimilarityMatrix, TitleIndex,
    DEFAULT_RECOMMENDATIONS, MAX_POPULAR,
};

// Re-export store
pub use bookwise_store::Library;

// Re-export API
pub use bookwise_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogEntry,
        Error, Result,
        PopularityTable, Recommendation, Recommender,
        SimilarityMatrix, TitleIndex,
        DEFAULT_RECOMMENDATIONS, MAX_POPULAR,
        Library,
        RestApi,
    };
}
