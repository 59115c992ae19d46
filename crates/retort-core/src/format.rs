//! # Display Formatting
//!
//! Renders results the way Indonesian operators read them: `Rp 399.500`,
//! `Rp 5.326,667`. Display only; formatted strings never flow back into a
//! calculation.
//!
//! ## Rounding at the Display Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field                     Rounding before display                      │
//! │  ─────                     ───────────────────────                      │
//! │  materials, labor,         up to 3 fraction digits, zeros trimmed       │
//! │  shipping, production,     (1600 → "1.600", 1234.5 → "1.234,5")         │
//! │  retort, total                                                          │
//! │                                                                         │
//! │  HPP, selling price        whole rupiah (5326.67 → "5.327")             │
//! │                                                                         │
//! │  units produced            plain count (75)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Rupiah;
use crate::types::CalculationResult;
use crate::DISPLAY_FRACTION_DIGITS;

/// Default currency prefix.
pub const RUPIAH_SYMBOL: &str = "Rp";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats a number with Indonesian separators.
///
/// Rounds half away from zero to at most `max_fraction_digits`, then drops
/// trailing fraction zeros.
///
/// ## Example
/// ```rust
/// use retort_core::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(399500), 3), "399.500");
/// assert_eq!(format_amount(dec!(5326.6666), 3), "5.326,667");
/// assert_eq!(format_amount(dec!(1600.0), 3), "1.600");
/// assert_eq!(format_amount(dec!(5326.6666), 0), "5.327");
/// ```
pub fn format_amount(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

/// Formats an amount with a currency prefix, e.g. `Rp 10.000`.
pub fn format_currency(amount: Rupiah, symbol: &str) -> String {
    format!("{} {}", symbol, format_amount(amount.amount(), DISPLAY_FRACTION_DIGITS))
}

/// Formats an amount as rupiah, e.g. `Rp 10.000`.
///
/// ## Example
/// ```rust
/// use retort_core::{format_rupiah, Rupiah};
///
/// assert_eq!(format_rupiah(Rupiah::from_whole(382_500)), "Rp 382.500");
/// ```
pub fn format_rupiah(amount: Rupiah) -> String {
    format_currency(amount, RUPIAH_SYMBOL)
}

/// A [`CalculationResult`] rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub materials_cost: String,
    pub labor_cost: String,
    pub shipping_cost: String,
    pub production_cost: String,
    pub retort_service_cost: String,
    pub total_cost: String,
    pub units_produced: u32,

    /// HPP, rounded to whole rupiah.
    pub cost_per_unit: String,

    /// Selling price, rounded to whole rupiah.
    pub selling_price_per_unit: String,
}

impl FormattedResult {
    /// Renders `result` with the given currency prefix.
    pub fn with_symbol(result: &CalculationResult, symbol: &str) -> Self {
        let money = |amount: Rupiah| format_currency(amount, symbol);

        FormattedResult {
            materials_cost: money(result.materials_cost),
            labor_cost: money(result.labor_cost),
            shipping_cost: money(result.shipping_cost),
            production_cost: money(result.production_cost),
            retort_service_cost: money(result.retort_service_cost),
            total_cost: money(result.total_cost),
            units_produced: result.units_produced,
            cost_per_unit: money(result.cost_per_unit.round_whole()),
            selling_price_per_unit: money(result.selling_price_per_unit.round_whole()),
        }
    }
}

impl From<&CalculationResult> for FormattedResult {
    fn from(result: &CalculationResult) -> Self {
        FormattedResult::with_symbol(result, RUPIAH_SYMBOL)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingEngine;
    use crate::types::{CalculationInputs, IngredientCost, TierId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(dec!(0), 3), "0");
        assert_eq!(format_amount(dec!(999), 3), "999");
        assert_eq!(format_amount(dec!(1000), 3), "1.000");
        assert_eq!(format_amount(dec!(12345), 3), "12.345");
        assert_eq!(format_amount(dec!(1234567), 3), "1.234.567");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_amount(dec!(1234.5), 3), "1.234,5");
        assert_eq!(format_amount(dec!(0.0004), 3), "0");
        assert_eq!(format_amount(dec!(0.0005), 3), "0,001");
        assert_eq!(format_amount(dec!(2.5), 0), "3");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_amount(dec!(-1234.5), 3), "-1.234,5");
        assert_eq!(format_amount(dec!(-0.0001), 3), "0");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(Rupiah::from_whole(10_000)), "Rp 10.000");
        assert_eq!(format_rupiah(Rupiah::zero()), "Rp 0");
        assert_eq!(format_currency(Rupiah::from_whole(1_600), "IDR"), "IDR 1.600");
    }

    #[test]
    fn test_formatted_result_rounds_only_unit_prices() {
        let inputs = CalculationInputs {
            ingredients: vec![IngredientCost::new("Rendang", Rupiah::from_whole(10_000))],
            labor_cost: Rupiah::from_whole(5_000),
            shipping_cost: Rupiah::from_whole(2_000),
            shipping_weight_kg: dec!(1),
            tier: TierId::Grams100,
        };
        let result = PricingEngine::new().compute(&inputs);
        let formatted = FormattedResult::from(&result);

        assert_eq!(formatted.materials_cost, "Rp 10.000");
        assert_eq!(formatted.labor_cost, "Rp 5.000");
        assert_eq!(formatted.shipping_cost, "Rp 2.000");
        assert_eq!(formatted.production_cost, "Rp 17.000");
        assert_eq!(formatted.retort_service_cost, "Rp 382.500");
        assert_eq!(formatted.total_cost, "Rp 399.500");
        assert_eq!(formatted.units_produced, 75);
        assert_eq!(formatted.cost_per_unit, "Rp 5.327");
        assert_eq!(formatted.selling_price_per_unit, "Rp 6.658");

        // Formatting leaves the exact values untouched
        assert_eq!(result.cost_per_unit.round_dp(2).amount(), dec!(5326.67));
    }

    #[test]
    fn test_formatted_result_fractional_shipping() {
        let inputs = CalculationInputs {
            shipping_cost: Rupiah::from_whole(1_234),
            shipping_weight_kg: dec!(3),
            tier: TierId::Grams500,
            ..Default::default()
        };
        let result = PricingEngine::new().compute(&inputs);
        let formatted = FormattedResult::with_symbol(&result, "Rp");
        assert_eq!(formatted.shipping_cost, "Rp 987,2");
    }
}
