use crate::{Error, Result};

/// Precomputed N x N item-item similarity matrix, row-major.
///
/// Entry (i, j) is the similarity between titles i and j. The matrix is
/// symmetric by construction upstream; symmetry is not re-checked here.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build a matrix from row-major scores.
    ///
    /// Fails with [`Error::MatrixShape`] unless `scores.len() == n * n`.
    pub fn new(n: usize, scores: Vec<f32>) -> Result<Self> {
        let expected = n * n;
        if scores.len() != expected {
            return Err(Error::MatrixShape {
                n,
                expected,
                actual: scores.len(),
            });
        }
        Ok(Self { n, scores })
    }

    /// Matrix dimension N.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Similarity row for a given title index.
    #[inline]
    pub fn row(&self, idx: usize) -> Option<&[f32]> {
        if idx >= self.n {
            return None;
        }
        let start = idx * self.n;
        Some(&self.scores[start..start + self.n])
    }
}
