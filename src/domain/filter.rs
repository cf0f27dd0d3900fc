//! Client-side catalog filtering and pagination.
//!
//! The catalog API returns the full product list; narrowing by search
//! term or category and slicing into pages all happens in memory. These
//! are pure, total transforms with no state of their own.

use super::Product;

/// Default number of products per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// A browse query: optional filters plus a 1-based page selection.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    /// Case-insensitive substring match against the product title.
    pub search: Option<String>,
    /// Restrict to products in this category.
    pub category: Option<u64>,
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: usize,
    /// Page size.
    pub per_page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of filtered results.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Products on this page, in catalog order.
    pub items: Vec<Product>,
    /// The 1-based page number actually selected.
    pub page: usize,
    /// Page size used for slicing.
    pub per_page: usize,
    /// Total products matching the filters, across all pages.
    pub matched: usize,
}

impl CatalogPage {
    /// Number of pages the matched set spans. At least 1, so an empty
    /// result still renders as "page 1 of 1".
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.matched.div_ceil(self.per_page).max(1)
    }
}

impl CatalogQuery {
    /// Apply the filters and slice out the selected page.
    ///
    /// Filtering preserves catalog order; a page past the end of the
    /// matched set yields an empty `items`.
    pub fn apply(&self, products: Vec<Product>) -> CatalogPage {
        let term = self.search.as_ref().map(|t| t.to_lowercase());
        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|p| match &term {
                Some(t) => p.title.to_lowercase().contains(t),
                None => true,
            })
            .filter(|p| match self.category {
                Some(id) => p.category.id == id,
                None => true,
            })
            .collect();

        let matched = filtered.len();
        let page = self.page.max(1);
        let items = filtered
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        CatalogPage {
            items,
            page,
            per_page: self.per_page,
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{product, product_in_category};

    fn catalog() -> Vec<Product> {
        vec![
            product_in_category(1, "Red Chair", 1),
            product_in_category(2, "Blue Chair", 1),
            product_in_category(3, "Desk Lamp", 2),
            product_in_category(4, "Armchair", 1),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = CatalogQuery {
            search: Some("chair".into()),
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert_eq!(page.matched, 3);
        let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Red Chair", "Blue Chair", "Armchair"]);
    }

    #[test]
    fn category_filter_by_id() {
        let query = CatalogQuery {
            category: Some(2),
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert_eq!(page.matched, 1);
        assert_eq!(page.items[0].title, "Desk Lamp");
    }

    #[test]
    fn filters_compose() {
        let query = CatalogQuery {
            search: Some("chair".into()),
            category: Some(1),
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert_eq!(page.matched, 3);
    }

    #[test]
    fn pagination_slices_in_order() {
        let products: Vec<_> = (1..=25).map(|i| product(i, &format!("Item {i}"))).collect();
        let query = CatalogQuery {
            page: 2,
            ..Default::default()
        };
        let page = query.apply(products);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].title, "Item 11");
        assert_eq!(page.matched, 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn page_past_end_is_empty() {
        let query = CatalogQuery {
            page: 9,
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert!(page.items.is_empty());
        assert_eq!(page.matched, 4);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let query = CatalogQuery {
            page: 0,
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn empty_result_still_spans_one_page() {
        let query = CatalogQuery {
            search: Some("no such product".into()),
            ..Default::default()
        };
        let page = query.apply(catalog());
        assert_eq!(page.matched, 0);
        assert_eq!(page.total_pages(), 1);
    }
}
