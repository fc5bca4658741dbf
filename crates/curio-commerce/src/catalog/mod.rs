//! Catalog module.
//!
//! Read-only product and category data the rest of the system consumes.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use product::{Condition, Product};
