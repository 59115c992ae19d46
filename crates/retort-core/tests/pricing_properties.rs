//! Property tests for the pricing engine invariants.

use proptest::prelude::*;
use retort_core::pricing::discounted_shipping;
use retort_core::{
    CalculationForm, CalculationInputs, CoreError, IngredientCost, IngredientField,
    PricingEngine, Rupiah, TierId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tier_id() -> impl Strategy<Value = TierId> {
    prop_oneof![
        Just(TierId::Grams100),
        Just(TierId::Grams250),
        Just(TierId::Grams500),
    ]
}

/// Non-negative rupiah amounts with up to two fraction digits.
fn amount() -> impl Strategy<Value = Rupiah> {
    (0i64..50_000_000_00).prop_map(|cents| Rupiah::new(Decimal::new(cents, 2)))
}

/// Shipping weights from 0 to 10 kg in grams.
fn weight_kg() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|grams| Decimal::new(grams, 3))
}

fn inputs() -> impl Strategy<Value = CalculationInputs> {
    (
        prop::collection::vec(amount(), 0..12),
        amount(),
        amount(),
        weight_kg(),
        tier_id(),
    )
        .prop_map(|(prices, labor_cost, shipping_cost, shipping_weight_kg, tier)| {
            CalculationInputs {
                ingredients: prices
                    .into_iter()
                    .map(|price| IngredientCost::new("bahan", price))
                    .collect(),
                labor_cost,
                shipping_cost,
                shipping_weight_kg,
                tier,
            }
        })
}

proptest! {
    #[test]
    fn totals_add_up(inputs in inputs()) {
        let result = PricingEngine::new().compute(&inputs);

        prop_assert_eq!(
            result.production_cost,
            result.materials_cost + result.labor_cost + result.shipping_cost
        );
        prop_assert_eq!(
            result.total_cost,
            result.production_cost + result.retort_service_cost
        );
    }

    #[test]
    fn unit_cost_times_units_is_total(inputs in inputs()) {
        let result = PricingEngine::new().compute(&inputs);

        let rebuilt = result.cost_per_unit * result.units_produced;
        let drift = (rebuilt - result.total_cost).amount().abs();
        prop_assert!(drift < dec!(0.01), "drift {}", drift);
    }

    #[test]
    fn selling_price_is_cost_plus_quarter(inputs in inputs()) {
        let result = PricingEngine::new().compute(&inputs);
        prop_assert_eq!(result.selling_price_per_unit, result.cost_per_unit * dec!(1.25));
    }

    #[test]
    fn units_follow_the_tier(inputs in inputs()) {
        let result = PricingEngine::new().compute(&inputs);
        let expected = match inputs.tier {
            TierId::Grams100 => 75,
            TierId::Grams250 => 45,
            TierId::Grams500 => 20,
        };
        prop_assert_eq!(result.units_produced, expected);
    }

    #[test]
    fn materials_are_the_sum_of_prices(inputs in inputs()) {
        let result = PricingEngine::new().compute(&inputs);
        let expected: Rupiah = inputs.ingredients.iter().map(|item| item.price).sum();
        prop_assert_eq!(result.materials_cost, expected);
    }

    #[test]
    fn light_shipments_pay_full_price(shipping in amount(), grams in 0i64..2_000) {
        let weight = Decimal::new(grams, 3);
        prop_assert_eq!(discounted_shipping(shipping, weight), shipping);
    }

    #[test]
    fn heavy_shipments_pay_eighty_percent(shipping in amount(), grams in 2_000i64..100_000) {
        let weight = Decimal::new(grams, 3);
        prop_assert_eq!(discounted_shipping(shipping, weight), shipping * dec!(0.8));
    }

    #[test]
    fn compute_is_repeatable(inputs in inputs()) {
        let engine = PricingEngine::new();
        prop_assert_eq!(engine.compute(&inputs), engine.compute(&inputs));
    }

    #[test]
    fn unknown_tier_keys_never_compute(key in "[a-z0-9 ]{0,6}") {
        prop_assume!(!matches!(key.trim(), "100g" | "250g" | "500g"));

        let form = CalculationForm {
            tier: key.clone(),
            ..CalculationForm::default()
        };
        let err = PricingEngine::new().compute_form(&form).unwrap_err();
        prop_assert_eq!(err, CoreError::UnknownPackagingTier { key: key.trim().to_string() });
    }

    #[test]
    fn non_numeric_price_counts_as_zero(text in "[a-zA-Z ]{1,12}") {
        let mut form = CalculationForm::new();
        form.update_ingredient(0, IngredientField::Price, text);

        let result = PricingEngine::new().compute_form(&form).unwrap();
        prop_assert_eq!(result.materials_cost, Rupiah::zero());
    }
}

#[test]
fn empty_ingredient_list_costs_nothing() {
    let inputs = CalculationInputs {
        tier: TierId::Grams250,
        ..Default::default()
    };
    let result = PricingEngine::new().compute(&inputs);
    assert_eq!(result.materials_cost, Rupiah::zero());
    assert_eq!(result.total_cost, result.retort_service_cost);
}

#[test]
fn discount_applies_at_exactly_two_kilograms() {
    let quote = Rupiah::from_whole(2_000);
    assert_eq!(discounted_shipping(quote, dec!(2.000)), Rupiah::from_whole(1_600));
    assert_eq!(discounted_shipping(quote, dec!(1.999)), quote);
}
