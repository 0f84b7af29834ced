//! Size filtering and the size facet catalog.

use std::collections::{BTreeMap, HashSet};

use storefront_core::Product;

/// Keeps only products carrying at least one of the selected size tags.
///
/// An empty selection includes every product (no filtering).
#[must_use]
pub fn filter_by_sizes(products: &[Product], selected: &HashSet<String>) -> Vec<Product> {
    if selected.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.size_tags.iter().any(|t| selected.contains(t)))
        .cloned()
        .collect()
}

/// One selectable size option with its occurrence count in the current
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    pub label: String,
    pub count: usize,
}

/// The catalog of available size options for a product sequence.
///
/// Built with a single scan; options are distinct tags sorted
/// alphabetically. The option list supports incremental free-text filtering
/// without rescanning the backing products.
#[derive(Debug, Clone, Default)]
pub struct SizeFacets {
    options: Vec<SizeOption>,
}

impl SizeFacets {
    /// Scans `products` once, counting tag frequency.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for product in products {
            for tag in &product.size_tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        let options = counts
            .into_iter()
            .map(|(label, count)| SizeOption {
                label: label.to_owned(),
                count,
            })
            .collect();
        Self { options }
    }

    /// All options, alphabetical.
    #[must_use]
    pub fn options(&self) -> &[SizeOption] {
        &self.options
    }

    /// Options whose label contains `query`, case-insensitive. An empty
    /// query returns every option.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<&SizeOption> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn with_tags(id: &str, tags: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: String::new(),
            price: 0.0,
            discount: None,
            size_tags: tags.iter().map(|&t| t.to_string()).collect(),
            sales_count: 0,
            created_at: DateTime::UNIX_EPOCH,
            category_labels: Vec::new(),
        }
    }

    fn selection(tags: &[&str]) -> HashSet<String> {
        tags.iter().map(|&t| t.to_string()).collect()
    }

    #[test]
    fn empty_selection_includes_everything() {
        let products = vec![with_tags("1", &["S"]), with_tags("2", &[])];
        let filtered = filter_by_sizes(&products, &HashSet::new());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn selection_includes_any_tag_member() {
        let products = vec![
            with_tags("1", &["S", "M"]),
            with_tags("2", &["L"]),
            with_tags("3", &["M", "XL"]),
        ];
        let filtered = filter_by_sizes(&products, &selection(&["M"]));
        let ids: Vec<_> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn untagged_products_are_excluded_by_a_selection() {
        let products = vec![with_tags("1", &[]), with_tags("2", &["S"])];
        let filtered = filter_by_sizes(&products, &selection(&["S"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn facets_count_tag_occurrences() {
        let products = vec![
            with_tags("1", &["S", "M"]),
            with_tags("2", &["M"]),
            with_tags("3", &["M", "L"]),
        ];
        let facets = SizeFacets::from_products(&products);
        let m = facets
            .options()
            .iter()
            .find(|o| o.label == "M")
            .expect("expected an M option");
        assert_eq!(m.count, 3);
    }

    #[test]
    fn facets_are_alphabetical() {
        let products = vec![with_tags("1", &["XL", "L", "M", "S"])];
        let facets = SizeFacets::from_products(&products);
        let labels: Vec<_> = facets.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["L", "M", "S", "XL"]);
    }

    #[test]
    fn facets_of_empty_sequence_are_empty() {
        let facets = SizeFacets::from_products(&[]);
        assert!(facets.is_empty());
        assert_eq!(facets.len(), 0);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let products = vec![with_tags("1", &["Small", "Medium", "X-Large"])];
        let facets = SizeFacets::from_products(&products);
        let hits = facets.matching("lar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "X-Large");
    }

    #[test]
    fn matching_empty_query_returns_all_options() {
        let products = vec![with_tags("1", &["S", "M"])];
        let facets = SizeFacets::from_products(&products);
        assert_eq!(facets.matching("").len(), 2);
        assert_eq!(facets.matching("  ").len(), 2);
    }

    #[test]
    fn matching_no_hits_returns_empty() {
        let products = vec![with_tags("1", &["S", "M"])];
        let facets = SizeFacets::from_products(&products);
        assert!(facets.matching("zzz").is_empty());
    }
}
