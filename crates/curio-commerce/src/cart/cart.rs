//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::{LineId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row in a cart: a single product and its requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Owner of the cart.
    pub user_id: UserId,
    /// Requested quantity, always in `[1, product.available]`.
    pub quantity: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product_id: ProductId, user_id: UserId, quantity: u32) -> Self {
        let now = Utc::now();
        Self {
            id: LineId::generate(),
            product_id,
            user_id,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The observable outcome of a cart mutation.
///
/// Mutations mirror user-triggered UI actions that can race harmlessly
/// (a double-clicked remove, an add for a vanished listing), so none of
/// them are errors. The tag makes "nothing happened" and "request was
/// reduced" explicit instead of forcing callers to diff cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEffect {
    /// The request was applied as given.
    Applied { line_id: LineId },
    /// The request was applied, reduced to the available quantity.
    Clamped {
        line_id: LineId,
        requested: u32,
        applied: u32,
    },
    /// A line was removed.
    Removed { line_id: LineId },
    /// Nothing changed.
    NoOp,
}

impl CartEffect {
    /// The line this effect touched, if any.
    pub fn line_id(&self) -> Option<&LineId> {
        match self {
            CartEffect::Applied { line_id }
            | CartEffect::Clamped { line_id, .. }
            | CartEffect::Removed { line_id } => Some(line_id),
            CartEffect::NoOp => None,
        }
    }

    /// Check if the cart changed.
    pub fn changed(&self) -> bool {
        !matches!(self, CartEffect::NoOp)
    }
}

/// An ordered collection of cart lines scoped to one user/session.
///
/// Invariant: no two lines share a product, and no line has quantity 0 —
/// a quantity reaching 0 deletes the line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, clamped to its availability.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is created. A request that
    /// cannot yield at least one unit leaves the cart untouched.
    pub fn add(&mut self, product: &Product, quantity: u32, user_id: &UserId) -> CartEffect {
        if quantity == 0 {
            return CartEffect::NoOp;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let requested = line.quantity.saturating_add(quantity);
            let applied = product.clamp_quantity(requested);
            if applied == 0 {
                // Availability dropped to zero since the line was added.
                let id = line.id.clone();
                return self.remove(&id);
            }
            line.quantity = applied;
            line.updated_at = Utc::now();
            let line_id = line.id.clone();
            return if applied == requested {
                CartEffect::Applied { line_id }
            } else {
                CartEffect::Clamped {
                    line_id,
                    requested,
                    applied,
                }
            };
        }

        let applied = product.clamp_quantity(quantity);
        if applied == 0 {
            // Out of stock; never create a zero-quantity line.
            return CartEffect::NoOp;
        }
        let line = CartLine::new(product.id.clone(), user_id.clone(), applied);
        let line_id = line.id.clone();
        self.lines.push(line);
        if applied == quantity {
            CartEffect::Applied { line_id }
        } else {
            CartEffect::Clamped {
                line_id,
                requested: quantity,
                applied,
            }
        }
    }

    /// Set a line's quantity, clamped to the product's availability.
    ///
    /// `quantity` must be at least 1; callers route 0 through
    /// [`Cart::remove`]. Unknown line ids are a no-op.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: u32, product: &Product) -> CartEffect {
        debug_assert!(quantity > 0, "zero quantity is a removal");
        let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) else {
            return CartEffect::NoOp;
        };

        let applied = product.clamp_quantity(quantity);
        if applied == 0 {
            return self.remove(line_id);
        }
        line.quantity = applied;
        line.updated_at = Utc::now();
        if applied == quantity {
            CartEffect::Applied {
                line_id: line_id.clone(),
            }
        } else {
            CartEffect::Clamped {
                line_id: line_id.clone(),
                requested: quantity,
                applied,
            }
        }
    }

    /// Remove a line. Unknown ids are a no-op, so removing twice equals
    /// removing once.
    pub fn remove(&mut self, line_id: &LineId) -> CartEffect {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        if self.lines.len() < len_before {
            CartEffect::Removed {
                line_id: line_id.clone(),
            }
        } else {
            CartEffect::NoOp
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by ID.
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Get the line holding a product.
    pub fn line_for_product(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn user() -> UserId {
        UserId::new("user-1")
    }

    fn listing(available: u32) -> Product {
        Product::new("prod-1", "Walkman", Money::from_decimal(20.0), available, "1", "seller-1")
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::new();
        let effect = cart.add(&listing(3), 2, &user());
        assert!(matches!(effect, CartEffect::Applied { .. }));
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_same_product_increments_one_line() {
        let mut cart = Cart::new();
        let product = listing(10);
        cart.add(&product, 1, &user());
        cart.add(&product, 2, &user());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_clamps_to_availability() {
        let mut cart = Cart::new();
        let product = listing(3);
        cart.add(&product, 2, &user());
        let effect = cart.add(&product, 5, &user());
        assert_eq!(cart.item_count(), 3);
        match effect {
            CartEffect::Clamped {
                requested, applied, ..
            } => {
                assert_eq!(requested, 7);
                assert_eq!(applied, 3);
            }
            other => panic!("expected clamp, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_adds_converge_on_availability() {
        let mut cart = Cart::new();
        let product = listing(4);
        for _ in 0..10 {
            cart.add(&product, 1, &user());
        }
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&listing(3), 0, &user()), CartEffect::NoOp);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_out_of_stock_creates_no_line() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&listing(0), 1, &user()), CartEffect::NoOp);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let product = listing(3);
        let line_id = cart.add(&product, 2, &user()).line_id().unwrap().clone();
        cart.set_quantity(&line_id, 1, &product);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut cart = Cart::new();
        let product = listing(3);
        let line_id = cart.add(&product, 1, &user()).line_id().unwrap().clone();
        let effect = cart.set_quantity(&line_id, 99, &product);
        assert!(matches!(effect, CartEffect::Clamped { applied: 3, .. }));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_set_quantity_refreshes_updated_at() {
        let mut cart = Cart::new();
        let product = listing(5);
        let line_id = cart.add(&product, 1, &user()).line_id().unwrap().clone();
        let before = cart.line(&line_id).unwrap().updated_at;
        cart.set_quantity(&line_id, 2, &product);
        assert!(cart.line(&line_id).unwrap().updated_at >= before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        let line_id = cart.add(&listing(3), 1, &user()).line_id().unwrap().clone();
        assert!(matches!(cart.remove(&line_id), CartEffect::Removed { .. }));
        assert_eq!(cart.remove(&line_id), CartEffect::NoOp);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&listing(3), 2, &user());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_lines_serialize_dates_as_iso8601() {
        let mut cart = Cart::new();
        cart.add(&listing(3), 1, &user());
        let json = serde_json::to_string(&cart).unwrap();
        // RFC 3339 timestamps, e.g. "2026-08-30T12:00:00Z"
        assert!(json.contains("created_at"));
        assert!(json.contains('T'));
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
