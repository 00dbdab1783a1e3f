//! Search query builder and in-memory execution.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{Filter, Pagination, SearchResults};

/// Default listing page size.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order (default).
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Parse the CLI/URL form ("price-asc", "rating", ...).
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.to_lowercase().as_str() {
            "featured" => Some(SortOption::Featured),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            "name" => Some(SortOption::NameAsc),
            "rating" => Some(SortOption::Rating),
            _ => None,
        }
    }

    /// Sort matched products in place. `Featured` keeps catalog order;
    /// every sort is stable, so ties keep it too.
    fn apply(&self, products: &mut [&Product]) {
        match self {
            SortOption::Featured => {}
            SortOption::PriceAsc => {
                products.sort_by_key(|p| p.effective_price().amount_minor);
            }
            SortOption::PriceDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.effective_price().amount_minor));
            }
            SortOption::NameAsc => {
                products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortOption::Rating => {
                products.sort_by(|a, b| b.rating.average.total_cmp(&a.rating.average));
            }
        }
    }
}

/// A product search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query, if any.
    pub query: Option<String>,
    /// Filters to apply (all must match).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl SearchQuery {
    /// Create an unfiltered query with default pagination.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::Featured,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination, clamped to sane bounds.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Run the query against a product slice.
    ///
    /// Filters, sorts, then slices out the requested page. Matched
    /// products are cloned into the result page.
    pub fn execute(&self, products: &[Product]) -> SearchResults<Product> {
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();

        self.sort.apply(&mut matched);

        let total = matched.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);

        let items = matched
            .into_iter()
            .skip(pagination.offset().max(0) as usize)
            .take(self.per_page as usize)
            .cloned()
            .collect();

        SearchResults::new(items, pagination)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockLevel;
    use crate::ids::{CategoryId, ProductId};
    use crate::money::{Currency, Money};
    use crate::reviews::RatingSummary;

    fn product(id: &str, name: &str, price: i64, rating: f64, stock: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            slug: id.to_string(),
            brand: "Acme".to_string(),
            description: None,
            category_id: CategoryId::new("electronics"),
            subcategory_id: None,
            price: Money::new(price, Currency::INR),
            discounted_price: None,
            stock: StockLevel::new(stock),
            rating: RatingSummary::new(rating, 5),
            images: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "Zoom Lens", 5000, 4.8, 2),
            product("p2", "Alarm Clock", 1000, 3.1, 0),
            product("p3", "Microphone", 3000, 4.2, 7),
            product("p4", "Keyboard", 2000, 4.2, 1),
        ]
    }

    #[test]
    fn featured_keeps_catalog_order() {
        let results = SearchQuery::new().execute(&catalog());
        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn price_sorts_both_directions() {
        let asc = SearchQuery::new()
            .with_sort(SortOption::PriceAsc)
            .execute(&catalog());
        let ids: Vec<&str> = asc.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p4", "p3", "p1"]);

        let desc = SearchQuery::new()
            .with_sort(SortOption::PriceDesc)
            .execute(&catalog());
        let ids: Vec<&str> = desc.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3", "p4", "p2"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let results = SearchQuery::new()
            .with_sort(SortOption::NameAsc)
            .execute(&catalog());
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Alarm Clock", "Keyboard", "Microphone", "Zoom Lens"]
        );
    }

    #[test]
    fn rating_sort_is_stable_for_ties() {
        let results = SearchQuery::new()
            .with_sort(SortOption::Rating)
            .execute(&catalog());
        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        // p3 and p4 share a rating; catalog order breaks the tie.
        assert_eq!(ids, vec!["p1", "p3", "p4", "p2"]);
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let results = SearchQuery::new()
            .with_filter(Filter::in_stock())
            .with_filter(Filter::price_range(
                None,
                Some(Money::new(3000, Currency::INR)),
            ))
            .execute(&catalog());

        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p4"]);
    }

    #[test]
    fn text_query_becomes_a_filter() {
        let results = SearchQuery::new().with_query("micro").execute(&catalog());
        assert_eq!(results.items.len(), 1);
        assert_eq!(results.items[0].id.as_str(), "p3");
    }

    #[test]
    fn empty_text_query_is_ignored() {
        let query = SearchQuery::new().with_query("");
        assert!(query.query.is_none());
        assert!(query.filters.is_empty());
    }

    #[test]
    fn pagination_slices_the_matched_set() {
        let results = SearchQuery::new()
            .with_pagination(2, 3)
            .execute(&catalog());

        assert_eq!(results.items.len(), 1);
        assert_eq!(results.items[0].id.as_str(), "p4");
        assert_eq!(results.pagination.total, 4);
        assert_eq!(results.pagination.total_pages, 2);
        assert!(!results.pagination.has_next);
    }

    #[test]
    fn page_past_the_end_is_empty_but_counted() {
        let results = SearchQuery::new()
            .with_pagination(9, 12)
            .execute(&catalog());

        assert!(results.items.is_empty());
        assert_eq!(results.pagination.total, 4);
    }

    #[test]
    fn no_matches_yield_empty_results() {
        let results = SearchQuery::new()
            .with_query("teapot")
            .execute(&catalog());

        assert!(results.is_empty());
        assert_eq!(results.pagination.total, 0);
    }
}
