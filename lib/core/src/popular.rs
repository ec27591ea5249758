use crate::CatalogEntry;

/// Ceiling on how many popular books are ever served.
pub const MAX_POPULAR: usize = 50;

/// Pre-ranked "most popular" listing, computed upstream and served as-is.
///
/// Unrelated to the similarity lookup; ordering is fixed by the artifact.
#[derive(Debug, Clone)]
pub struct PopularityTable {
    rows: Vec<CatalogEntry>,
}

impl PopularityTable {
    pub fn new(rows: Vec<CatalogEntry>) -> Self {
        Self { rows }
    }

    /// The top `limit` rows, capped at [`MAX_POPULAR`].
    pub fn top(&self, limit: usize) -> &[CatalogEntry] {
        let limit = limit.min(MAX_POPULAR).min(self.rows.len());
        &self.rows[..limit]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<CatalogEntry> {
        (0..count)
            .map(|i| CatalogEntry::new(format!("Book {i}"), format!("Author {i}"), format!("img-{i}.jpg")))
            .collect()
    }

    #[test]
    fn test_top_preserves_rank_order() {
        let table = PopularityTable::new(rows(10));
        let top = table.top(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].title, "Book 0");
        assert_eq!(top[2].title, "Book 2");
    }

    #[test]
    fn test_top_caps_at_fifty() {
        let table = PopularityTable::new(rows(80));
        assert_eq!(table.top(100).len(), MAX_POPULAR);
    }

    #[test]
    fn test_top_short_table() {
        let table = PopularityTable::new(rows(4));
        assert_eq!(table.top(50).len(), 4);
    }
}
