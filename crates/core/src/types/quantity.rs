//! Cart line quantity, confined to `[1, 99]`.

use core::fmt;

/// How many of one product a cart line holds.
///
/// The bounds come from the cart UI's number input (`min="1" max="99"`),
/// but the engine enforces them itself: user input is clamped into range
/// rather than rejected, and incrementing an entry already at the maximum
/// saturates instead of overflowing the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity a cart line can hold.
    pub const MIN: Self = Self(1);
    /// The largest quantity a cart line can hold.
    pub const MAX: Self = Self(99);
    /// A single item, the quantity of a freshly added entry.
    pub const ONE: Self = Self(1);

    /// Create a quantity from an already-validated value.
    ///
    /// Used when restoring persisted entries; the engine never writes an
    /// out-of-range quantity, so one in stored data marks the record as
    /// malformed rather than something to repair.
    ///
    /// Returns `None` if `value` is outside `[1, 99]`.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamp arbitrary user input into `[1, 99]`.
    ///
    /// Zero and negative values become 1, values above 99 become 99.
    #[must_use]
    pub fn clamp(value: i64) -> Self {
        if value < i64::from(Self::MIN.0) {
            Self::MIN
        } else if value > i64::from(Self::MAX.0) {
            Self::MAX
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self(value as u32)
        }
    }

    /// One more item, saturating at [`Quantity::MAX`].
    #[must_use]
    pub const fn saturating_add_one(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::MAX
        } else {
            Self(self.0 + 1)
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        assert_eq!(Quantity::new(1), Some(Quantity::MIN));
        assert_eq!(Quantity::new(50).unwrap().get(), 50);
        assert_eq!(Quantity::new(99), Some(Quantity::MAX));
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Quantity::new(0), None);
        assert_eq!(Quantity::new(100), None);
    }

    #[test]
    fn test_clamp_low() {
        assert_eq!(Quantity::clamp(0), Quantity::MIN);
        assert_eq!(Quantity::clamp(-5), Quantity::MIN);
        assert_eq!(Quantity::clamp(i64::MIN), Quantity::MIN);
    }

    #[test]
    fn test_clamp_high() {
        assert_eq!(Quantity::clamp(100), Quantity::MAX);
        assert_eq!(Quantity::clamp(150), Quantity::MAX);
        assert_eq!(Quantity::clamp(i64::MAX), Quantity::MAX);
    }

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(Quantity::clamp(1).get(), 1);
        assert_eq!(Quantity::clamp(42).get(), 42);
        assert_eq!(Quantity::clamp(99).get(), 99);
    }

    #[test]
    fn test_saturating_add_one() {
        assert_eq!(Quantity::ONE.saturating_add_one().get(), 2);
        assert_eq!(Quantity::MAX.saturating_add_one(), Quantity::MAX);
    }
}
