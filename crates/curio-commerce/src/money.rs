//! Money type for monetary values.
//!
//! Amounts are kept in whole cents so cart arithmetic stays exact;
//! decimal formatting happens only at presentation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary value in US dollars, stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use curio_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// Multiply by a decimal factor (e.g. a tax rate), rounded to the cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::from_cents((self.cents as f64 * factor).round() as i64)
    }

    /// Sum an iterator of Money values.
    pub fn sum(iter: impl Iterator<Item = Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }

    /// Format as a display string (e.g. "$49.99").
    pub fn display(&self) -> String {
        if self.cents < 0 {
            format!("-${:.2}", -self.to_decimal())
        } else {
            format!("${:.2}", self.to_decimal())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_sub(other.cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents, 4999);
        assert_eq!(Money::from_decimal(0.1).cents, 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents, 1250);
        assert_eq!((a - b).cents, 750);
        assert_eq!(a.multiply(3).cents, 3000);
    }

    #[test]
    fn test_multiply_decimal_rounds_to_cent() {
        // 8% of $45.00 is exactly $3.60
        assert_eq!(Money::from_cents(4500).multiply_decimal(0.08).cents, 360);
        // 8% of $0.07 is 0.56 cents, rounded to 1
        assert_eq!(Money::from_cents(7).multiply_decimal(0.08).cents, 1);
    }

    #[test]
    fn test_sum() {
        let items = [Money::from_cents(100), Money::from_cents(250)];
        assert_eq!(Money::sum(items.iter().copied()).cents, 350);
    }
}
