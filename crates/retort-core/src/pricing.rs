//! # Pricing Engine
//!
//! Turns one batch's costs into HPP and a suggested selling price.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        compute(inputs)                                  │
//! │                                                                         │
//! │  Σ ingredient prices ─────────────────► materials_cost                 │
//! │  labor ───────────────────────────────► labor_cost                     │
//! │  shipping × (0.8 if weight ≥ 2 kg) ───► shipping_cost                  │
//! │                                              │                          │
//! │                              sum ──────────► production_cost           │
//! │                                              │                          │
//! │  tier price/unit × units/batch ───────► retort_service_cost            │
//! │                                              │                          │
//! │                              sum ──────────► total_cost                │
//! │                                              │                          │
//! │                     ÷ units/batch ─────────► cost_per_unit (HPP)       │
//! │                                              │                          │
//! │                           × 1.25 ──────────► selling_price_per_unit    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is exact decimal arithmetic; nothing is rounded here.

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::form::CalculationForm;
use crate::money::Rupiah;
use crate::types::{CalculationInputs, CalculationResult, PackagingTier};
use crate::{MARGIN_MULTIPLIER, SHIPPING_DISCOUNT_FACTOR, SHIPPING_DISCOUNT_THRESHOLD_KG};

/// Applies the bulk shipping discount.
///
/// Shipments of 2 kg or more pay 80% of the quoted shipping cost. There is a
/// single breakpoint; heavier shipments get the same 20%.
///
/// ## Example
/// ```rust
/// use retort_core::pricing::discounted_shipping;
/// use retort_core::Rupiah;
/// use rust_decimal_macros::dec;
///
/// let quote = Rupiah::from_whole(2000);
/// assert_eq!(discounted_shipping(quote, dec!(1.99)), quote);
/// assert_eq!(discounted_shipping(quote, dec!(2)), Rupiah::from_whole(1600));
/// ```
pub fn discounted_shipping(shipping_cost: Rupiah, shipping_weight_kg: Decimal) -> Rupiah {
    if shipping_weight_kg >= SHIPPING_DISCOUNT_THRESHOLD_KG {
        shipping_cost * SHIPPING_DISCOUNT_FACTOR
    } else {
        shipping_cost
    }
}

/// Retort service fee for one full batch of the tier.
pub fn retort_service_cost(tier: &PackagingTier) -> Rupiah {
    tier.service_price_per_unit * tier.units_per_batch
}

/// The HPP calculator.
///
/// Stateless; tiers come from the compiled-in [`PackagingTier`] table, so
/// one engine can be shared freely across threads.
///
/// ## Example
/// ```rust
/// use retort_core::{CalculationInputs, IngredientCost, PricingEngine, Rupiah, TierId};
///
/// let inputs = CalculationInputs {
///     ingredients: vec![IngredientCost::new("Rendang", Rupiah::from_whole(10_000))],
///     labor_cost: Rupiah::from_whole(5_000),
///     shipping_cost: Rupiah::from_whole(2_000),
///     tier: TierId::Grams100,
///     ..Default::default()
/// };
///
/// let result = PricingEngine::new().compute(&inputs);
/// assert_eq!(result.production_cost, Rupiah::from_whole(17_000));
/// assert_eq!(result.retort_service_cost, Rupiah::from_whole(382_500));
/// assert_eq!(result.cost_per_unit.round_whole(), Rupiah::from_whole(5_327));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates an engine over the compiled-in tier table.
    pub const fn new() -> Self {
        PricingEngine
    }

    /// The tier table this engine prices against.
    pub fn tiers(&self) -> &'static [PackagingTier] {
        PackagingTier::all()
    }

    /// Computes the batch costing for parsed inputs.
    ///
    /// Pure and deterministic: identical inputs give identical results.
    pub fn compute(&self, inputs: &CalculationInputs) -> CalculationResult {
        let tier = PackagingTier::get(inputs.tier);

        let materials_cost: Rupiah = inputs.ingredients.iter().map(|item| item.price).sum();
        let labor_cost = inputs.labor_cost;
        let shipping_cost = discounted_shipping(inputs.shipping_cost, inputs.shipping_weight_kg);
        let retort_service_cost = retort_service_cost(tier);

        let production_cost = materials_cost + labor_cost + shipping_cost;
        let total_cost = production_cost + retort_service_cost;
        let cost_per_unit = total_cost / tier.units_per_batch;
        let selling_price_per_unit = cost_per_unit * MARGIN_MULTIPLIER;

        CalculationResult {
            materials_cost,
            labor_cost,
            shipping_cost,
            production_cost,
            retort_service_cost,
            total_cost,
            units_produced: tier.units_per_batch,
            cost_per_unit,
            selling_price_per_unit,
        }
    }

    /// Computes the batch costing straight from the raw form.
    ///
    /// Blank or non-numeric cost fields count as zero. An unknown tier key is
    /// returned as [`CoreError::UnknownPackagingTier`](crate::CoreError) and
    /// no result is produced.
    pub fn compute_form(&self, form: &CalculationForm) -> CoreResult<CalculationResult> {
        let inputs = form.to_inputs()?;
        Ok(self.compute(&inputs))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
