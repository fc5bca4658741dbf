//! The cart engine.

use curio_commerce::cart::{Cart, CartEffect, CartLine, PriceBreakdown, PricingConfig};
use curio_commerce::catalog::Catalog;
use curio_commerce::checkout::Purchase;
use curio_commerce::ids::{LineId, ProductId, UserId};
use curio_commerce::money::Money;
use curio_store::{Session, CART_KEY, PURCHASES_KEY};
use std::sync::Arc;

/// Owns the cart and its persistence, wired to a read-only catalog.
///
/// An engine is an explicitly constructed instance with a defined
/// lifecycle: [`CartEngine::load`] restores the persisted cart,
/// every mutation re-persists synchronously, and [`CartEngine::flush`]
/// writes the final state at teardown. Consumers hold the instance by
/// reference; there is no ambient singleton.
///
/// Mutations never error. Unknown product or line ids, clamped
/// quantities and a missing backing store all degrade to effects or
/// no-ops — the cart mirrors user-triggered UI actions and favors
/// availability over strictness.
pub struct CartEngine {
    cart: Cart,
    catalog: Arc<Catalog>,
    session: Session,
    pricing: PricingConfig,
    user_id: UserId,
}

impl CartEngine {
    /// Restore the persisted cart and build an engine over it.
    ///
    /// An absent or malformed stored cart starts empty.
    pub fn load(catalog: Arc<Catalog>, session: Session) -> Self {
        let cart = session.restore(CART_KEY);
        Self {
            cart,
            catalog,
            session,
            pricing: PricingConfig::default(),
            user_id: UserId::new("guest"),
        }
    }

    /// Set the pricing configuration.
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    /// Attribute new cart lines to a user.
    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Add units of a product to the cart.
    ///
    /// Unknown products are a no-op. An existing line for the product is
    /// incremented; the resulting quantity clamps to availability.
    pub fn add_item(&mut self, product_id: &ProductId, quantity: u32) -> CartEffect {
        let Some(product) = self.catalog.find_product(product_id) else {
            return CartEffect::NoOp;
        };
        let effect = self.cart.add(product, quantity, &self.user_id);
        if effect.changed() {
            self.persist();
        }
        effect
    }

    /// Remove a line. Unknown ids are a no-op; removing twice equals
    /// removing once.
    pub fn remove_item(&mut self, line_id: &LineId) -> CartEffect {
        let effect = self.cart.remove(line_id);
        if effect.changed() {
            self.persist();
        }
        effect
    }

    /// Set a line's quantity; 0 behaves exactly like [`Self::remove_item`].
    ///
    /// The new quantity clamps to the product's availability and the
    /// line's update timestamp is refreshed. A line whose product no
    /// longer resolves is left untouched.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: u32) -> CartEffect {
        if quantity == 0 {
            return self.remove_item(line_id);
        }
        let Some(product_id) = self.cart.line(line_id).map(|l| l.product_id.clone()) else {
            return CartEffect::NoOp;
        };
        let Some(product) = self.catalog.find_product(&product_id) else {
            return CartEffect::NoOp;
        };
        let effect = self.cart.set_quantity(line_id, quantity, product);
        if effect.changed() {
            self.persist();
        }
        effect
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Sum of `quantity × unit price` over all lines, recomputed against
    /// the catalog on every call.
    ///
    /// A line whose product has vanished contributes zero.
    pub fn total_price(&self) -> Money {
        Money::sum(self.cart.lines().iter().filter_map(|line| {
            self.catalog
                .find_product(&line.product_id)
                .map(|p| p.price.multiply(line.quantity))
        }))
    }

    /// The full pricing breakdown for the current cart.
    pub fn price_breakdown(&self) -> PriceBreakdown {
        self.pricing.breakdown(self.total_price())
    }

    /// Checkout stub: record the lines as purchases, append them to the
    /// persisted purchase log and clear the cart.
    ///
    /// Lines whose product no longer resolves are dropped, not charged.
    pub fn checkout(&mut self) -> Vec<Purchase> {
        if self.cart.is_empty() {
            return Vec::new();
        }
        let purchases: Vec<Purchase> = self
            .cart
            .lines()
            .iter()
            .filter_map(|line| {
                self.catalog
                    .find_product(&line.product_id)
                    .map(|p| Purchase::from_line(line, p))
            })
            .collect();

        let mut log: Vec<Purchase> = self.session.restore(PURCHASES_KEY);
        log.extend(purchases.iter().cloned());
        self.session.persist(PURCHASES_KEY, &log);

        self.cart.clear();
        self.persist();
        purchases
    }

    /// The persisted purchase log, oldest first.
    pub fn purchases(&self) -> Vec<Purchase> {
        self.session.restore(PURCHASES_KEY)
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog the engine resolves prices against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Persist the current state at teardown.
    pub fn flush(&self) {
        self.persist();
    }

    fn persist(&self) {
        self.session.persist(CART_KEY, &self.cart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CartEngine {
        CartEngine::load(Arc::new(Catalog::demo()), Session::in_memory())
    }

    #[test]
    fn test_starts_empty() {
        let engine = engine();
        assert_eq!(engine.total_item_count(), 0);
        assert!(engine.total_price().is_zero());
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut engine = engine();
        let effect = engine.add_item(&ProductId::new("prod-999"), 1);
        assert_eq!(effect, CartEffect::NoOp);
        assert_eq!(engine.total_item_count(), 0);
    }

    #[test]
    fn test_total_price_tracks_mutations() {
        // prod-5: $20.00, 3 available.
        let mut engine = engine();
        let p = ProductId::new("prod-5");

        engine.add_item(&p, 2);
        assert_eq!(engine.total_price(), Money::from_decimal(40.0));

        // Clamp at availability.
        engine.add_item(&p, 5);
        assert_eq!(engine.total_price(), Money::from_decimal(60.0));

        let line_id = engine.lines()[0].id.clone();
        engine.update_quantity(&line_id, 1);
        assert_eq!(engine.total_price(), Money::from_decimal(20.0));

        engine.remove_item(&line_id);
        assert!(engine.total_price().is_zero());
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut engine = engine();
        engine.add_item(&ProductId::new("prod-5"), 2);
        let line_id = engine.lines()[0].id.clone();

        let effect = engine.update_quantity(&line_id, 0);
        assert!(matches!(effect, CartEffect::Removed { .. }));
        assert!(engine.lines().is_empty());
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let mut engine = engine();
        assert_eq!(engine.remove_item(&LineId::new("nope")), CartEffect::NoOp);
    }

    #[test]
    fn test_clear() {
        let mut engine = engine();
        engine.add_item(&ProductId::new("prod-5"), 2);
        engine.add_item(&ProductId::new("prod-1"), 1);
        engine.clear();
        assert_eq!(engine.total_item_count(), 0);
        assert!(engine.total_price().is_zero());
    }

    #[test]
    fn test_vanished_product_contributes_zero() {
        // A catalog that loses a listing between mutations.
        let full = Arc::new(Catalog::demo());
        let session = Session::in_memory();
        let mut engine = CartEngine::load(Arc::clone(&full), session);
        engine.add_item(&ProductId::new("prod-5"), 2);
        engine.add_item(&ProductId::new("prod-1"), 1);
        engine.flush();

        // Reload against a catalog without prod-5.
        let remaining: Vec<_> = full
            .products()
            .iter()
            .filter(|p| p.id.as_str() != "prod-5")
            .cloned()
            .collect();
        let reduced = Arc::new(Catalog::new(remaining, full.categories().to_vec()));
        let engine2 = CartEngine {
            cart: engine.cart().clone(),
            catalog: reduced,
            session: Session::in_memory(),
            pricing: PricingConfig::default(),
            user_id: UserId::new("guest"),
        };

        // prod-1 is $45.00; the vanished prod-5 line adds nothing.
        assert_eq!(engine2.total_price(), Money::from_decimal(45.0));
        assert_eq!(engine2.total_item_count(), 3);
    }

    #[test]
    fn test_checkout_records_and_clears() {
        let mut engine = engine();
        engine.add_item(&ProductId::new("prod-5"), 2);
        let purchases = engine.checkout();

        assert_eq!(purchases.len(), 1);
        assert_eq!(purchases[0].total_price, Money::from_decimal(40.0));
        assert!(engine.lines().is_empty());
        assert_eq!(engine.purchases(), purchases);

        // Checkout on an empty cart records nothing.
        assert!(engine.checkout().is_empty());
        assert_eq!(engine.purchases().len(), 1);
    }

    #[test]
    fn test_price_breakdown_uses_cart_subtotal() {
        // prod-1 is $45.00: under the free shipping threshold.
        let mut engine = engine();
        engine.add_item(&ProductId::new("prod-1"), 1);
        let b = engine.price_breakdown();
        assert_eq!(b.subtotal, Money::from_decimal(45.0));
        assert_eq!(b.shipping, Money::from_decimal(9.99));
        assert_eq!(b.tax, Money::from_decimal(3.60));
        assert_eq!(b.total, Money::from_decimal(58.59));
    }
}
