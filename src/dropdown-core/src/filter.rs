//! Search filtering over the option catalog.
//!
//! The visible list is a case-insensitive substring match on option labels,
//! kept in catalog order. When searching is disabled the visible list is the
//! whole catalog no matter what the query holds.

use unicode_segmentation::UnicodeSegmentation;

use crate::catalog::OptionCatalog;
use crate::option::SelectOption;

/// Catalog indices of the options visible for `query`.
pub fn filter_indices(catalog: &OptionCatalog, query: &str, searchable: bool) -> Vec<usize> {
    if !searchable || query.is_empty() {
        return (0..catalog.len()).collect();
    }

    let query_lower = query.to_lowercase();
    catalog
        .all()
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Query text plus the visible subset it derives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Current search query
    query: String,
    /// Whether the query narrows the list
    searchable: bool,
    /// Indices into the catalog that match the current query
    visible: Vec<usize>,
}

impl SearchFilter {
    /// Create a filter showing the whole catalog.
    pub fn new(catalog: &OptionCatalog, searchable: bool) -> Self {
        Self {
            query: String::new(),
            searchable,
            visible: filter_indices(catalog, "", searchable),
        }
    }

    /// Recompute the visible list, e.g. after the catalog was replaced.
    pub fn refresh(&mut self, catalog: &OptionCatalog) {
        self.visible = filter_indices(catalog, &self.query, self.searchable);
    }

    /// Replace the query.
    pub fn set_query(&mut self, catalog: &OptionCatalog, query: impl Into<String>) {
        self.query = query.into();
        self.refresh(catalog);
    }

    /// Append a typed character.
    pub fn push_char(&mut self, catalog: &OptionCatalog, c: char) {
        self.query.push(c);
        self.refresh(catalog);
    }

    /// Remove the last grapheme cluster.
    pub fn pop_grapheme(&mut self, catalog: &OptionCatalog) {
        let graphemes: Vec<&str> = self.query.graphemes(true).collect();
        if let Some((_, rest)) = graphemes.split_last() {
            self.query = rest.concat();
        }
        self.refresh(catalog);
    }

    /// Reset the query to empty.
    pub fn clear(&mut self, catalog: &OptionCatalog) {
        self.query.clear();
        self.refresh(catalog);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Catalog indices of the visible options.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible options.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Catalog index of the visible option at `position`.
    pub fn catalog_index(&self, position: usize) -> Option<usize> {
        self.visible.get(position).copied()
    }

    /// Visible options in display order.
    pub fn visible_options<'a>(&self, catalog: &'a OptionCatalog) -> Vec<&'a SelectOption> {
        self.visible
            .iter()
            .filter_map(|&idx| catalog.get(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(vec![
            SelectOption::new("a", "Option 1"),
            SelectOption::new("b", "Option 2"),
            SelectOption::new("c", "Option 3"),
            SelectOption::new("d", "Another"),
        ])
        .expect("unique values")
    }

    #[test]
    fn test_empty_query_is_full_catalog() {
        let catalog = catalog();
        assert_eq!(filter_indices(&catalog, "", true), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(filter_indices(&catalog, "OPTION", true), vec![0, 1, 2]);
        assert_eq!(filter_indices(&catalog, "2", true), vec![1]);
        assert_eq!(filter_indices(&catalog, "noth", true), vec![3]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let catalog = catalog();
        assert!(filter_indices(&catalog, "zzz", true).is_empty());
    }

    #[test]
    fn test_not_searchable_ignores_query() {
        let catalog = catalog();
        assert_eq!(filter_indices(&catalog, "zzz", false), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_visible_is_subset_for_every_prefix() {
        let catalog = catalog();
        for query in ["", "o", "op", "opt", "x", "3", "an"] {
            let visible = filter_indices(&catalog, query, true);
            assert!(visible.iter().all(|&i| i < catalog.len()));
            assert!(visible.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_query_editing() {
        let catalog = catalog();
        let mut filter = SearchFilter::new(&catalog, true);

        filter.push_char(&catalog, '3');
        assert_eq!(filter.visible_indices(), &[2]);

        filter.pop_grapheme(&catalog);
        assert_eq!(filter.query(), "");
        assert_eq!(filter.visible_len(), 4);

        filter.set_query(&catalog, "zz");
        assert_eq!(filter.visible_len(), 0);

        filter.clear(&catalog);
        assert_eq!(filter.visible_len(), 4);
    }

    #[test]
    fn test_pop_grapheme_removes_whole_cluster() {
        let catalog = catalog();
        let mut filter = SearchFilter::new(&catalog, true);
        filter.set_query(&catalog, "ae\u{301}");
        filter.pop_grapheme(&catalog);
        assert_eq!(filter.query(), "a");
    }
}
