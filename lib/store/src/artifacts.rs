//! On-disk artifact formats.
//!
//! The four artifacts are produced offline by the training pipeline and
//! loaded once at startup. The small tabular artifacts are JSON; the bulk
//! similarity matrix is bincode.

use bookwise_core::{CatalogEntry, Error, Result, SimilarityMatrix};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const TITLES_FILE: &str = "titles.json";
pub const CATALOG_FILE: &str = "catalog.json";
pub const POPULAR_FILE: &str = "popular.json";
pub const SIMILARITY_FILE: &str = "similarity.bin";

/// Serialized form of the similarity matrix: dimension plus row-major scores.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityArtifact {
    pub n: u64,
    pub scores: Vec<f32>,
}

/// Read the ordered title list.
pub fn read_titles(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read(path)?;
    serde_json::from_slice(&data)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))
}

/// Read catalog rows (duplicate titles allowed; deduplicated downstream).
pub fn read_catalog_rows(path: &Path) -> Result<Vec<CatalogEntry>> {
    let data = std::fs::read(path)?;
    serde_json::from_slice(&data)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))
}

/// Read the pre-ranked popularity rows.
pub fn read_popular_rows(path: &Path) -> Result<Vec<CatalogEntry>> {
    read_catalog_rows(path)
}

/// Read and shape-check the similarity matrix.
pub fn read_similarity(path: &Path) -> Result<SimilarityMatrix> {
    let data = std::fs::read(path)?;
    let artifact: SimilarityArtifact = bincode::deserialize(&data)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
    SimilarityMatrix::new(artifact.n as usize, artifact.scores)
}

/// Write the title list (used by the export side of the pipeline and tests).
pub fn write_titles(path: &Path, titles: &[String]) -> Result<()> {
    let data = serde_json::to_vec_pretty(titles)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Write catalog or popularity rows.
pub fn write_rows(path: &Path, rows: &[CatalogEntry]) -> Result<()> {
    let data = serde_json::to_vec_pretty(rows)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Write the similarity matrix.
pub fn write_similarity(path: &Path, n: usize, scores: &[f32]) -> Result<()> {
    let artifact = SimilarityArtifact {
        n: n as u64,
        scores: scores.to_vec(),
    };
    let data = bincode::serialize(&artifact)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    std::fs::write(path, data)?;
    Ok(())
}
