//! Cart pricing calculations.

use crate::money::Money;

/// Knobs for the pricing calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Tax rate applied to the subtotal.
    pub tax_rate: f64,
    /// Shipping is free above this subtotal.
    pub free_shipping_threshold: Money,
    /// Flat shipping fee below the threshold.
    pub flat_shipping_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            free_shipping_threshold: Money::from_decimal(50.0),
            flat_shipping_fee: Money::from_decimal(9.99),
        }
    }
}

impl PricingConfig {
    /// Create a config with the default knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tax rate.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the free shipping threshold.
    pub fn with_free_shipping_threshold(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = threshold;
        self
    }

    /// Set the flat shipping fee.
    pub fn with_flat_shipping_fee(mut self, fee: Money) -> Self {
        self.flat_shipping_fee = fee;
        self
    }

    /// Derive the full breakdown from a subtotal.
    pub fn breakdown(&self, subtotal: Money) -> PriceBreakdown {
        let shipping = if subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping_fee
        };
        let tax = subtotal.multiply_decimal(self.tax_rate);
        PriceBreakdown {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// How much more to spend for free shipping, if not already earned.
    pub fn remaining_for_free_shipping(&self, subtotal: Money) -> Option<Money> {
        if subtotal > self.free_shipping_threshold {
            None
        } else {
            Some(self.free_shipping_threshold - subtotal)
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Sum of quantity times unit price over all lines.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount.
    pub tax: Money,
    /// Final total (subtotal + shipping + tax).
    pub total: Money,
}

impl PriceBreakdown {
    /// Check if shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
