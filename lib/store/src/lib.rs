//! # bookwise Store
//!
//! Artifact loading for the bookwise recommendation engine.
//!
//! The training pipeline runs offline and exports four artifacts; this crate
//! deserializes them at startup into the validated, read-only [`Library`]
//! that the rest of the process serves from.

pub mod artifacts;
pub mod library;

pub use artifacts::{
    SimilarityArtifact, CATALOG_FILE, POPULAR_FILE, SIMILARITY_FILE, TITLES_FILE,
};
pub use library::Library;
