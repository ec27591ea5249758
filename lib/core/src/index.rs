use crate::{Error, Result};
use ahash::AHashMap;

/// Ordered registry of unique book titles, positionally aligned with the
/// rows and columns of the similarity matrix.
///
/// Construction builds a title -> row map once, so per-lookup resolution is
/// O(1) instead of a positional scan.
#[derive(Debug, Clone)]
pub struct TitleIndex {
    titles: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl TitleIndex {
    /// Build an index from an ordered list of titles.
    ///
    /// Fails with [`Error::DuplicateTitle`] if the same title appears twice;
    /// duplicate rows in the index would make the matrix alignment ambiguous.
    pub fn new(titles: Vec<String>) -> Result<Self> {
        let mut positions = AHashMap::with_capacity(titles.len());
        for (row, title) in titles.iter().enumerate() {
            if positions.insert(title.clone(), row).is_some() {
                return Err(Error::DuplicateTitle(title.clone()));
            }
        }
        Ok(Self { titles, positions })
    }

    /// Row index for an exact title match. No fuzzy matching, no case folding.
    #[inline]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    /// Title at a given row.
    #[inline]
    pub fn title(&self, row: usize) -> Option<&str> {
        self.titles.get(row).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// All titles in index order.
    #[inline]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_lookup() {
        let index = TitleIndex::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(index.position("A"), Some(0));
        assert_eq!(index.position("B"), Some(1));
        assert_eq!(index.position("C"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_exact_match_only() {
        let index = TitleIndex::new(vec!["The Hobbit".to_string()]).unwrap();
        assert_eq!(index.position("the hobbit"), None);
        assert_eq!(index.position("The Hobbit "), None);
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let result = TitleIndex::new(vec![
            "A".to_string(),
            "B".to_string(),
            "A".to_string(),
        ]);
        assert!(matches!(result, Err(Error::DuplicateTitle(t)) if t == "A"));
    }

    #[test]
    fn test_title_by_row() {
        let index = TitleIndex::new(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(index.title(1), Some("B"));
        assert_eq!(index.title(2), None);
    }
}
