//! In-memory product search: filtering and sorting over the catalog.

use crate::catalog::{Condition, Product};
use crate::ids::CategoryId;
use crate::money::Money;
use std::str::FromStr;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Newest first.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Title A-Z.
    TitleAsc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::TitleAsc => "Title: A-Z",
        }
    }
}

impl FromStr for SortOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOption::Newest),
            "price-low" | "price_asc" => Ok(SortOption::PriceAsc),
            "price-high" | "price_desc" => Ok(SortOption::PriceDesc),
            "title" => Ok(SortOption::TitleAsc),
            _ => Err(()),
        }
    }
}

/// A predicate over products.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive match in title or description.
    Text(String),
    /// Listings in a category.
    Category(CategoryId),
    /// Listings within a price range (bounds inclusive).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Listings with a condition grade.
    Condition(Condition),
    /// Only listings with units available.
    InStock,
}

impl Filter {
    /// Create a text filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let q = query.to_lowercase();
                product.title.to_lowercase().contains(&q)
                    || product.description.to_lowercase().contains(&q)
            }
            Filter::Category(id) => &product.category_id == id,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |m| product.price >= m)
                    && max.map_or(true, |m| product.price <= m)
            }
            Filter::Condition(condition) => product.condition == *condition,
            Filter::InStock => product.is_in_stock(),
        }
    }
}

/// A filtered, sorted product query.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    filters: Vec<Filter>,
    sort: SortOption,
}

impl ProductQuery {
    /// Create an unfiltered query sorted by newest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter; all filters must pass.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query over a product slice.
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut results: Vec<&Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();

        match self.sort {
            SortOption::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOption::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOption::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOption::TitleAsc => results.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_filter(Filter::text("WALKMAN"))
            .run(catalog.products());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "prod-1");
    }

    #[test]
    fn test_text_filter_matches_description() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_filter(Filter::text("cassette"))
            .run(catalog.products());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_price_range() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_filter(Filter::price_range(
                Some(Money::from_decimal(30.0)),
                Some(Money::from_decimal(50.0)),
            ))
            .run(catalog.products());
        assert!(results
            .iter()
            .all(|p| p.price >= Money::from_decimal(30.0) && p.price <= Money::from_decimal(50.0)));
        assert!(!results.is_empty());
    }

    #[test]
    fn test_condition_filter() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_filter(Filter::Condition(Condition::LikeNew))
            .run(catalog.products());
        assert!(results.iter().all(|p| p.condition == Condition::LikeNew));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_filters_compose() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_filter(Filter::Condition(Condition::LikeNew))
            .with_filter(Filter::category("5"))
            .run(catalog.products());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "prod-5");
    }

    #[test]
    fn test_sort_price_ascending() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new()
            .with_sort(SortOption::PriceAsc)
            .run(catalog.products());
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_sort_newest_first() {
        let catalog = Catalog::demo();
        let results = ProductQuery::new().run(catalog.products());
        assert!(results.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_sort_option_from_str() {
        assert_eq!("price-low".parse(), Ok(SortOption::PriceAsc));
        assert_eq!("newest".parse(), Ok(SortOption::Newest));
        assert!("popular".parse::<SortOption>().is_err());
    }
}
