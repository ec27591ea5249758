use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Duplicate title in index: {0}")]
    DuplicateTitle(String),

    #[error("Dimension mismatch: title index has {titles} entries, similarity matrix is {matrix}x{matrix}")]
    DimensionMismatch { titles: usize, matrix: usize },

    #[error("Invalid matrix shape: expected {expected} scores for a {n}x{n} matrix, got {actual}")]
    MatrixShape { n: usize, expected: usize, actual: usize },

    #[error("No catalog entry for indexed title: {0}")]
    MissingCatalogEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
