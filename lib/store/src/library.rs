use crate::artifacts::{
    self, CATALOG_FILE, POPULAR_FILE, SIMILARITY_FILE, TITLES_FILE,
};
use bookwise_core::{Catalog, PopularityTable, Recommender, Result, TitleIndex};
use std::path::{Path, PathBuf};

/// The loaded, validated, process-wide read-only state.
///
/// Loaded once at startup and shared into the API layer behind an `Arc`;
/// nothing here is mutated afterwards, so concurrent lookups need no locking.
pub struct Library {
    recommender: Recommender,
    popular: PopularityTable,
    data_dir: PathBuf,
}

impl Library {
    /// Load and validate the four artifacts from a directory.
    ///
    /// Any missing or malformed artifact, and any cross-artifact
    /// inconsistency (duplicate titles, dimension mismatch, indexed title
    /// missing from the catalog), fails the load. Callers treat that as a
    /// fatal startup error.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let titles = artifacts::read_titles(&data_dir.join(TITLES_FILE))?;
        let matrix = artifacts::read_similarity(&data_dir.join(SIMILARITY_FILE))?;
        let catalog_rows = artifacts::read_catalog_rows(&data_dir.join(CATALOG_FILE))?;
        let popular_rows = artifacts::read_popular_rows(&data_dir.join(POPULAR_FILE))?;

        let index = TitleIndex::new(titles)?;
        let catalog = Catalog::new(catalog_rows);
        let recommender = Recommender::new(index, matrix, catalog)?;
        let popular = PopularityTable::new(popular_rows);

        Ok(Self {
            recommender,
            popular,
            data_dir,
        })
    }

    #[inline]
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    #[inline]
    pub fn popular(&self) -> &PopularityTable {
        &self.popular
    }

    /// All indexed titles, in matrix order.
    #[inline]
    pub fn titles(&self) -> &[String] {
        self.recommender.index().titles()
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookwise_core::{CatalogEntry, Error};
    use std::path::Path;

    fn entry(title: &str) -> CatalogEntry {
        CatalogEntry::new(title, format!("{title} Author"), format!("{title}.jpg"))
    }

    fn write_artifacts(dir: &Path, titles: &[&str], scores: &[f32]) {
        let titles: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
        let rows: Vec<CatalogEntry> = titles.iter().map(|t| entry(t)).collect();
        artifacts::write_titles(&dir.join(TITLES_FILE), &titles).unwrap();
        artifacts::write_rows(&dir.join(CATALOG_FILE), &rows).unwrap();
        artifacts::write_rows(&dir.join(POPULAR_FILE), &rows).unwrap();
        artifacts::write_similarity(&dir.join(SIMILARITY_FILE), titles.len(), scores).unwrap();
    }

    #[test]
    fn test_load_and_recommend() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            &["A", "B", "C"],
            &[1.0, 0.8, 0.3, 0.8, 1.0, 0.6, 0.3, 0.6, 1.0],
        );

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.titles(), &["A", "B", "C"]);

        let results = library.recommender().recommend("A").unwrap();
        assert_eq!(results[0].title, "B");
        assert_eq!(results[1].title, "C");
    }

    #[test]
    fn test_load_fails_on_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), &["A", "B"], &[1.0, 0.5, 0.5, 1.0]);
        // Overwrite the matrix with a 3x3 one
        artifacts::write_similarity(&dir.path().join(SIMILARITY_FILE), 3, &[1.0; 9]).unwrap();

        assert!(matches!(
            Library::load(dir.path()),
            Err(Error::DimensionMismatch { titles: 2, matrix: 3 })
        ));
    }

    #[test]
    fn test_load_fails_on_missing_catalog_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), &["A", "B"], &[1.0, 0.5, 0.5, 1.0]);
        artifacts::write_rows(&dir.path().join(CATALOG_FILE), &[entry("A")]).unwrap();

        assert!(matches!(
            Library::load(dir.path()),
            Err(Error::MissingCatalogEntry(t)) if t == "B"
        ));
    }

    #[test]
    fn test_load_fails_on_duplicate_title() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), &["A", "B"], &[1.0, 0.5, 0.5, 1.0]);
        let titles = vec!["A".to_string(), "A".to_string()];
        artifacts::write_titles(&dir.path().join(TITLES_FILE), &titles).unwrap();

        assert!(matches!(
            Library::load(dir.path()),
            Err(Error::DuplicateTitle(t)) if t == "A"
        ));
    }

    #[test]
    fn test_load_fails_on_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Library::load(dir.path()), Err(Error::Io(_))));
    }
}
