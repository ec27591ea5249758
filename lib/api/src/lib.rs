//! # bookwise API
//!
//! REST presentation boundary for the bookwise recommendation engine.
//!
//! Serves the loaded [`Library`](bookwise_store::Library): the title index,
//! the popular-books listing, and the similarity lookup.

pub mod rest;

pub use rest::RestApi;
