use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Display attributes for a single book: title, author, cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

impl CatalogEntry {
    #[inline]
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
        }
    }
}

/// Reference data keyed by title, independent of the similarity computation.
///
/// The backing rows may contain duplicate titles (duplicate editions); one
/// representative per unique title is surfaced, the first in row order,
/// matching the upstream data's drop-duplicates convention.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: AHashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new(rows: Vec<CatalogEntry>) -> Self {
        let mut entries = AHashMap::with_capacity(rows.len());
        for row in rows {
            entries.entry(row.title.clone()).or_insert(row);
        }
        Self { entries }
    }

    /// First representative entry for a title, if any.
    #[inline]
    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    #[inline]
    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// Number of unique titles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_representative_wins() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Dune", "Frank Herbert", "dune-1965.jpg"),
            CatalogEntry::new("Dune", "F. Herbert", "dune-reissue.jpg"),
        ]);
        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("Dune").unwrap();
        assert_eq!(entry.author, "Frank Herbert");
        assert_eq!(entry.image_url, "dune-1965.jpg");
    }

    #[test]
    fn test_missing_title() {
        let catalog = Catalog::new(vec![CatalogEntry::new("Dune", "Frank Herbert", "dune.jpg")]);
        assert!(catalog.get("Hyperion").is_none());
        assert!(!catalog.contains("Hyperion"));
    }
}
