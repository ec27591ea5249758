//! Similarity-based recommendation lookup.
//!
//! Maps a query title to a ranked list of similar titles with display
//! attributes, using a precomputed item-item similarity matrix.

use crate::{Catalog, Error, Result, SimilarityMatrix, TitleIndex};
use serde::{Deserialize, Serialize};

/// Number of recommendations returned by [`Recommender::recommend`].
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// A recommended book with its display attributes and similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub score: f32,
}

/// Lookup engine over the loaded read-only artifacts.
///
/// Construction validates the cross-structure invariants once; lookups are
/// pure functions of the immutable state and safe to call concurrently.
pub struct Recommender {
    index: TitleIndex,
    matrix: SimilarityMatrix,
    catalog: Catalog,
}

impl Recommender {
    /// Build a recommender, validating that the artifacts agree with each
    /// other.
    ///
    /// Fails if the matrix dimension does not match the index length, or if
    /// an indexed title has no catalog entry. These are configuration errors
    /// surfaced at startup, never per-lookup.
    pub fn new(index: TitleIndex, matrix: SimilarityMatrix, catalog: Catalog) -> Result<Self> {
        if index.len() != matrix.n() {
            return Err(Error::DimensionMismatch {
                titles: index.len(),
                matrix: matrix.n(),
            });
        }

        for title in index.titles() {
            if !catalog.contains(title) {
                return Err(Error::MissingCatalogEntry(title.clone()));
            }
        }

        Ok(Self { index, matrix, catalog })
    }

    #[inline]
    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The top [`DEFAULT_RECOMMENDATIONS`] titles most similar to the query.
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.recommend_limit(title, DEFAULT_RECOMMENDATIONS)
    }

    /// The top `limit` titles most similar to the query, excluding the query
    /// itself.
    ///
    /// The query must match an indexed title exactly; otherwise the lookup
    /// fails with [`Error::TitleNotFound`]. Results are ordered by score
    /// descending, with equal scores ordered by ascending row index so the
    /// ranking is reproducible regardless of sort stability. Rank 1 is
    /// skipped: self-similarity is maximal, so it is always the query title.
    /// Fewer than `limit` results are returned when the index is small; that
    /// is not an error.
    pub fn recommend_limit(&self, title: &str, limit: usize) -> Result<Vec<Recommendation>> {
        let idx = self
            .index
            .position(title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

        let row = self
            .matrix
            .row(idx)
            .ok_or_else(|| Error::InvalidConfig(format!("similarity row {idx} out of bounds")))?;

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let results = ranked
            .into_iter()
            .skip(1)
            .take(limit)
            .filter_map(|(row_idx, score)| {
                let title = self.index.title(row_idx)?;
                let entry = self.catalog.get(title)?;
                Some(Recommendation {
                    title: entry.title.clone(),
                    author: entry.author.clone(),
                    image_url: entry.image_url.clone(),
                    score,
                })
            })
            .collect();

        Ok(results)
    }
}
