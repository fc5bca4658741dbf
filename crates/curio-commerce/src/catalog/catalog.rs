//! The catalog store: a read-only, in-memory product and category list.

use crate::catalog::{Category, Condition, Product};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use crate::search::ProductQuery;
use chrono::{Duration, Utc};

/// Read-only product/category store.
///
/// The cart engine looks prices and availability up here and never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from listings and categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Find a product by ID.
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products belonging to a category.
    pub fn products_in_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category_id == category_id)
            .collect()
    }

    /// Find a category by ID.
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Run a filtered, sorted query over the catalog.
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        query.run(&self.products)
    }

    /// Seed catalog with demo listings, standing in for a real feed.
    pub fn demo() -> Self {
        let categories = vec![
            Category::new("1", "Electronics"),
            Category::new("2", "Fashion"),
            Category::new("3", "Home & Garden"),
            Category::new("4", "Sports"),
            Category::new("5", "Books"),
            Category::new("6", "Toys"),
        ];

        let base = Utc::now();
        let products = vec![
            Product::new("prod-1", "Sony Walkman WM-FX290", Money::from_decimal(45.0), 2, "1", "seller-1")
                .with_description("Working portable cassette player with FM/AM radio.")
                .with_condition(Condition::Good)
                .with_brand("Sony")
                .with_created_at(base - Duration::days(1)),
            Product::new("prod-2", "Levi's 501 Jeans, W32 L34", Money::from_decimal(38.5), 1, "2", "seller-2")
                .with_description("Classic straight fit, light fade.")
                .with_condition(Condition::LikeNew)
                .with_brand("Levi's")
                .with_created_at(base - Duration::days(2)),
            Product::new("prod-3", "Le Creuset Dutch Oven 4.5qt", Money::from_decimal(120.0), 1, "3", "seller-1")
                .with_description("Flame orange, minor scratches on the enamel.")
                .with_condition(Condition::Good)
                .with_brand("Le Creuset")
                .with_created_at(base - Duration::days(3)),
            Product::new("prod-4", "Wilson Tennis Racket", Money::from_decimal(25.0), 3, "4", "seller-3")
                .with_description("Freshly restrung, grip replaced.")
                .with_condition(Condition::Fair)
                .with_brand("Wilson")
                .with_created_at(base - Duration::days(4)),
            Product::new("prod-5", "The Rust Programming Language", Money::from_decimal(20.0), 3, "5", "seller-2")
                .with_description("Second edition, unmarked pages.")
                .with_condition(Condition::LikeNew)
                .with_created_at(base - Duration::days(5)),
            Product::new("prod-6", "LEGO Technic Crane Set", Money::from_decimal(60.0), 2, "6", "seller-3")
                .with_description("Complete with instructions, original box.")
                .with_condition(Condition::New)
                .with_created_at(base - Duration::days(6)),
        ];

        Self::new(products, categories)
    }
}
