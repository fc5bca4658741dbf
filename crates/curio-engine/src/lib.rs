//! The Curio cart engine.
//!
//! Ties the domain core together: an owned cart, price lookups against
//! a read-only [`Catalog`](curio_commerce::catalog::Catalog), derived
//! pricing, and synchronous persistence through
//! [`Session`](curio_store::Session) after every mutation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use curio_commerce::catalog::Catalog;
//! use curio_commerce::ids::ProductId;
//! use curio_engine::CartEngine;
//! use curio_store::Session;
//!
//! let mut engine = CartEngine::load(Arc::new(Catalog::demo()), Session::in_memory());
//! engine.add_item(&ProductId::new("prod-5"), 2);
//!
//! let breakdown = engine.price_breakdown();
//! assert_eq!(breakdown.total, breakdown.subtotal + breakdown.shipping + breakdown.tax);
//! ```

mod engine;

pub use engine::CartEngine;
