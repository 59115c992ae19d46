//! # Money Module
//!
//! Provides the `Rupiah` type for handling monetary values exactly.
//!
//! ## Why Decimal, Not Float?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 floating point:                                                 │
//! │    2000 × 0.8 = 1600.0000000000002 on some inputs  ❌                   │
//! │                                                                         │
//! │  HPP is a DIVISION:                                                     │
//! │    Rp 399.500 / 75 pcs = Rp 5.326,666...                                │
//! │    Integer rupiah would drop the fraction before the margin is applied │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic, 28 significant digits.                    │
//! │    Rounding to whole rupiah happens ONLY when rendering.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use retort_core::money::Rupiah;
//!
//! let price = Rupiah::from_whole(5100);
//! let batch = price * 75u32;
//! assert_eq!(batch, Rupiah::from_whole(382_500));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// =============================================================================
// Rupiah Type
// =============================================================================

/// A monetary amount in Indonesian rupiah.
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact arithmetic; the sign is kept so a caller that
///   types a negative figure sees it flow through unchanged
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Transparent serde**: serialized as the decimal string (`"5326.67"`)
///
/// ## Where Rupiah is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  IngredientCost.price ──► materials_cost ──┐                           │
/// │  labor_cost ───────────────────────────────┼──► production_cost        │
/// │  shipping_cost (after discount) ───────────┘          │                │
/// │                                                        ▼                │
/// │  tier price × units ──► retort_service_cost ──► total_cost             │
/// │                                                        │                │
/// │                                     ÷ units ──► cost_per_unit (HPP)    │
/// │                                                        │                │
/// │                                      × 1.25 ──► selling_price_per_unit │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupiah(Decimal);

impl Rupiah {
    /// Zero rupiah.
    pub const ZERO: Rupiah = Rupiah(Decimal::ZERO);

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Rupiah(amount)
    }

    /// Creates an amount of whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use retort_core::money::Rupiah;
    ///
    /// assert_eq!(Rupiah::from_whole(8000).to_string(), "8000");
    /// ```
    #[inline]
    pub fn from_whole(rupiah: i64) -> Self {
        Rupiah(Decimal::from(rupiah))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero rupiah.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the amount is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to whole rupiah, half away from zero.
    ///
    /// Display boundary only. Never feed the rounded value back into a
    /// calculation.
    ///
    /// ## Example
    /// ```rust
    /// use retort_core::money::Rupiah;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Rupiah::new(dec!(5326.67)).round_whole(), Rupiah::from_whole(5327));
    /// assert_eq!(Rupiah::new(dec!(6658.5)).round_whole(), Rupiah::from_whole(6659));
    /// ```
    pub fn round_whole(&self) -> Self {
        Rupiah(self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Rounds to `places` fraction digits, half away from zero.
    pub fn round_dp(&self, places: u32) -> Self {
        Rupiah(
            self.0
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Scales the amount by a decimal factor (discounts, margins).
    #[inline]
    pub fn scale(&self, factor: Decimal) -> Self {
        Rupiah(self.0 * factor)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal representation without trailing zeros (`"1600"`, `"5326.5"`).
///
/// ## Note
/// This is for logs and debugging. Use [`crate::format::format_rupiah`] for
/// the localized `Rp 1.600` form shown to users.
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Default for Rupiah {
    fn default() -> Self {
        Rupiah::zero()
    }
}

impl From<Decimal> for Rupiah {
    fn from(amount: Decimal) -> Self {
        Rupiah(amount)
    }
}

impl Add for Rupiah {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupiah(self.0 + other.0)
    }
}

impl AddAssign for Rupiah {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rupiah(self.0 - other.0)
    }
}

impl SubAssign for Rupiah {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (per-unit price × units per batch).
impl Mul<u32> for Rupiah {
    type Output = Self;

    #[inline]
    fn mul(self, units: u32) -> Self {
        Rupiah(self.0 * Decimal::from(units))
    }
}

/// Multiplication by a decimal factor.
impl Mul<Decimal> for Rupiah {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        self.scale(factor)
    }
}

/// Division by a unit count (batch cost ÷ units produced).
///
/// Panics on a zero divisor, like integer division. Every packaging tier
/// has a non-zero batch size.
impl Div<u32> for Rupiah {
    type Output = Self;

    #[inline]
    fn div(self, units: u32) -> Self {
        Rupiah(self.0 / Decimal::from(units))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Rupiah> for Rupiah {
    fn sum<I: Iterator<Item = &'a Rupiah>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_whole() {
        let money = Rupiah::from_whole(10_000);
        assert_eq!(money.amount(), dec!(10000));
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(Rupiah::new(dec!(1600.0)).to_string(), "1600");
        assert_eq!(Rupiah::new(dec!(5326.50)).to_string(), "5326.5");
        assert_eq!(Rupiah::zero().to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupiah::from_whole(1000);
        let b = Rupiah::from_whole(500);

        assert_eq!(a + b, Rupiah::from_whole(1500));
        assert_eq!(a - b, Rupiah::from_whole(500));
        assert_eq!(a * 3u32, Rupiah::from_whole(3000));
        assert_eq!(a * dec!(0.8), Rupiah::from_whole(800));
        assert_eq!(a / 4u32, Rupiah::new(dec!(250)));
    }

    #[test]
    fn test_division_keeps_fraction() {
        let total = Rupiah::from_whole(399_500);
        let hpp = total / 75u32;
        assert!(hpp.amount() > dec!(5326.66));
        assert!(hpp.amount() < dec!(5326.67));
        assert_eq!(hpp.round_dp(2).amount(), dec!(5326.67));
    }

    #[test]
    fn test_round_whole_half_away_from_zero() {
        assert_eq!(Rupiah::new(dec!(2.5)).round_whole(), Rupiah::from_whole(3));
        assert_eq!(Rupiah::new(dec!(2.49)).round_whole(), Rupiah::from_whole(2));
        assert_eq!(Rupiah::new(dec!(-2.5)).round_whole(), Rupiah::from_whole(-3));
    }

    #[test]
    fn test_sum() {
        let prices = [Rupiah::from_whole(100), Rupiah::from_whole(250)];
        let total: Rupiah = prices.iter().sum();
        assert_eq!(total, Rupiah::from_whole(350));

        let empty: Vec<Rupiah> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Rupiah>(), Rupiah::zero());
    }

    #[test]
    fn test_zero_and_sign_checks() {
        assert!(Rupiah::zero().is_zero());
        assert!(!Rupiah::zero().is_negative());
        assert!(Rupiah::from_whole(-1).is_negative());
        assert!(!Rupiah::from_whole(1).is_negative());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Rupiah::new(dec!(1600))).unwrap();
        assert_eq!(json, "\"1600\"");

        let back: Rupiah = serde_json::from_str("\"5100\"").unwrap();
        assert_eq!(back, Rupiah::from_whole(5100));
    }
}
