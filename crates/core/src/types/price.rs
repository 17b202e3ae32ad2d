//! Type-safe price representation.
//!
//! Prices are whole Rupiah (the minor unit - IDR has no fractional
//! subunit), so integer arithmetic is exact and no decimal type is needed.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use crate::types::Quantity;

/// A price in minor currency units (whole Rupiah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// A zero price (the total of an empty cart).
    pub const ZERO: Self = Self(0);

    /// Create a new price from minor units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// The price of `quantity` items at this unit price.
    ///
    /// Saturates at `u64::MAX`; a cart total is a derived display value,
    /// not an amount anyone is charged, so overflow must not panic.
    #[must_use]
    pub fn times(&self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity.get())))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Formats as "Rp 1.234.567" - the id-ID convention, grouping with dots
/// and no fractional part.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "Rp {grouped}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::new(0).to_string(), "Rp 0");
        assert_eq!(Price::new(999).to_string(), "Rp 999");
        assert_eq!(Price::new(1_000).to_string(), "Rp 1.000");
        assert_eq!(Price::new(10_000).to_string(), "Rp 10.000");
        assert_eq!(Price::new(1_234_567).to_string(), "Rp 1.234.567");
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::new(10_000);
        assert_eq!(price.times(Quantity::clamp(2)), Price::new(20_000));
        assert_eq!(price.times(Quantity::clamp(99)), Price::new(990_000));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(100), Price::new(250)].into_iter().sum();
        assert_eq!(total, Price::new(350));
    }

    #[test]
    fn test_times_saturates() {
        let price = Price::new(u64::MAX);
        assert_eq!(price.times(Quantity::clamp(99)), Price::new(u64::MAX));
    }
}
