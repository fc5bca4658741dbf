//! Storefront domain types and logic for Curio.
//!
//! This crate holds the client-local core of the storefront:
//!
//! - **Catalog**: read-only products and categories
//! - **Cart**: the cart state machine and pricing calculator
//! - **Search**: in-memory filtering and sorting of listings
//! - **Checkout**: purchase records for the checkout stub
//!
//! # Example
//!
//! ```
//! use curio_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let product = catalog.find_product(&ProductId::new("prod-1")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(product, 2, &UserId::new("user-1"));
//!
//! let subtotal = product.price.multiply(2);
//! let breakdown = PricingConfig::default().breakdown(subtotal);
//! println!("Total: {}", breakdown.total);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ids;
pub mod money;
pub mod search;

pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::Money;

    pub use crate::catalog::{Catalog, Category, Condition, Product};

    pub use crate::cart::{Cart, CartEffect, CartLine, PriceBreakdown, PricingConfig};

    pub use crate::checkout::{Purchase, PurchaseStatus};

    pub use crate::search::{Filter, ProductQuery, SortOption};
}
