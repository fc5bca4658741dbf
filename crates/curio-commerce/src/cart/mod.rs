//! Shopping cart module.
//!
//! The cart state machine and the pure pricing calculator.

mod cart;
mod pricing;

pub use cart::{Cart, CartEffect, CartLine};
pub use pricing::{PriceBreakdown, PricingConfig};
