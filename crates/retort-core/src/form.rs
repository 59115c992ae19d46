//! # Calculation Form
//!
//! The raw, string-typed input bundle exactly as the form layer holds it.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Form Operations                           │
//! │                                                                         │
//! │  Form Action              Method                   Form Change          │
//! │  ───────────              ──────                   ───────────          │
//! │                                                                         │
//! │  Click "Tambah Bahan" ───► add_ingredient() ──────► rows.push(blank)   │
//! │                                                                         │
//! │  Type in a row ──────────► update_ingredient() ───► rows[i].field = v  │
//! │                                                                         │
//! │  Pick a unit ────────────► set_unit() ────────────► rows[i].unit = u   │
//! │                                                                         │
//! │  Click trash icon ───────► remove_ingredient() ───► rows.remove(i)     │
//! │                            (last row is kept)                          │
//! │                                                                         │
//! │  Any change ─────────────► to_inputs() ───────────► CalculationInputs  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::parse::{parse_amount, parse_rupiah, parse_tier_key};
use crate::types::{CalculationInputs, IngredientCost, TierId, Unit};

/// One ingredient row as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientEntry {
    pub name: String,
    pub weight: String,
    pub unit: Unit,
    pub price: String,
}

impl IngredientEntry {
    /// Parses the row. Blank or non-numeric weight/price become zero.
    pub fn to_cost(&self) -> IngredientCost {
        IngredientCost::new(self.name.trim(), parse_rupiah(&self.price))
            .with_quantity(parse_amount(&self.weight), self.unit)
    }
}

/// Editable text fields of an ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Weight,
    Price,
}

/// The calculator form: ingredient rows, cost fields, and the tier selection.
///
/// Missing JSON fields take their [`Default`] value, so a partially filled
/// form still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationForm {
    pub ingredients: Vec<IngredientEntry>,
    pub labor_cost: String,
    pub shipping_cost: String,
    pub shipping_weight_kg: String,

    /// Selected packaging tier key (`"100g"`, `"250g"`, `"500g"`).
    pub tier: String,
}

impl Default for CalculationForm {
    /// One blank ingredient row and the 100g tier selected.
    fn default() -> Self {
        CalculationForm {
            ingredients: vec![IngredientEntry::default()],
            labor_cost: String::new(),
            shipping_cost: String::new(),
            shipping_weight_kg: String::new(),
            tier: TierId::default().key().to_string(),
        }
    }
}

impl CalculationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank ingredient row.
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(IngredientEntry::default());
    }

    /// Removes the row at `index`.
    ///
    /// Returns `false` and leaves the form unchanged when `index` is out of
    /// range or the row is the only one left.
    ///
    /// ## Example
    /// ```rust
    /// use retort_core::CalculationForm;
    ///
    /// let mut form = CalculationForm::new();
    /// assert!(!form.remove_ingredient(0)); // the last row stays
    ///
    /// form.add_ingredient();
    /// assert!(form.remove_ingredient(1));
    /// assert_eq!(form.ingredients.len(), 1);
    /// ```
    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if self.ingredients.len() <= 1 || index >= self.ingredients.len() {
            return false;
        }

        self.ingredients.remove(index);
        true
    }

    /// Sets one text field of the row at `index`. Returns `false` if there is
    /// no such row.
    pub fn update_ingredient(
        &mut self,
        index: usize,
        field: IngredientField,
        value: impl Into<String>,
    ) -> bool {
        let Some(entry) = self.ingredients.get_mut(index) else {
            return false;
        };

        let value = value.into();
        match field {
            IngredientField::Name => entry.name = value,
            IngredientField::Weight => entry.weight = value,
            IngredientField::Price => entry.price = value,
        }
        true
    }

    /// Sets the unit of the row at `index`. Returns `false` if there is no
    /// such row.
    pub fn set_unit(&mut self, index: usize, unit: Unit) -> bool {
        match self.ingredients.get_mut(index) {
            Some(entry) => {
                entry.unit = unit;
                true
            }
            None => false,
        }
    }

    /// Builds engine inputs from the form.
    ///
    /// Numeric fields are parsed fail-soft (blank or garbage is zero). The
    /// tier key must be one of the known keys.
    pub fn to_inputs(&self) -> CoreResult<CalculationInputs> {
        let tier = parse_tier_key(&self.tier)?;

        Ok(CalculationInputs {
            ingredients: self.ingredients.iter().map(IngredientEntry::to_cost).collect(),
            labor_cost: parse_rupiah(&self.labor_cost),
            shipping_cost: parse_rupiah(&self.shipping_cost),
            shipping_weight_kg: parse_amount(&self.shipping_weight_kg),
            tier,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Rupiah;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_form_matches_initial_screen() {
        let form = CalculationForm::new();
        assert_eq!(form.ingredients.len(), 1);
        assert_eq!(form.ingredients[0].unit, Unit::Gram);
        assert!(form.ingredients[0].price.is_empty());
        assert_eq!(form.tier, "100g");
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut form = CalculationForm::new();
        form.add_ingredient();
        form.add_ingredient();
        form.update_ingredient(1, IngredientField::Name, "Santan");
        assert_eq!(form.ingredients.len(), 3);

        assert!(form.remove_ingredient(0));
        assert_eq!(form.ingredients.len(), 2);
        assert_eq!(form.ingredients[0].name, "Santan");

        assert!(!form.remove_ingredient(5));
        assert_eq!(form.ingredients.len(), 2);
    }

    #[test]
    fn test_last_row_is_never_removed() {
        let mut form = CalculationForm::new();
        assert!(!form.remove_ingredient(0));
        assert_eq!(form.ingredients.len(), 1);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut form = CalculationForm::new();
        assert!(!form.update_ingredient(3, IngredientField::Price, "100"));
        assert!(!form.set_unit(3, Unit::Liter));
        assert!(form.set_unit(0, Unit::Liter));
        assert_eq!(form.ingredients[0].unit, Unit::Liter);
    }

    #[test]
    fn test_to_inputs_parses_fields() {
        let mut form = CalculationForm::new();
        form.update_ingredient(0, IngredientField::Name, " Daging sapi ");
        form.update_ingredient(0, IngredientField::Weight, "1.5");
        form.update_ingredient(0, IngredientField::Price, "10000");
        form.set_unit(0, Unit::Kilogram);
        form.labor_cost = "5000".to_string();
        form.shipping_cost = "2000".to_string();
        form.shipping_weight_kg = "2".to_string();
        form.tier = "250g".to_string();

        let inputs = form.to_inputs().unwrap();
        assert_eq!(inputs.ingredients.len(), 1);
        assert_eq!(inputs.ingredients[0].name, "Daging sapi");
        assert_eq!(inputs.ingredients[0].price, Rupiah::from_whole(10_000));
        assert_eq!(inputs.ingredients[0].weight, dec!(1.5));
        assert_eq!(inputs.ingredients[0].unit, Unit::Kilogram);
        assert_eq!(inputs.labor_cost, Rupiah::from_whole(5000));
        assert_eq!(inputs.shipping_cost, Rupiah::from_whole(2000));
        assert_eq!(inputs.shipping_weight_kg, dec!(2));
        assert_eq!(inputs.tier, TierId::Grams250);
    }

    #[test]
    fn test_to_inputs_blank_fields_are_zero() {
        let inputs = CalculationForm::new().to_inputs().unwrap();
        assert_eq!(inputs.ingredients[0].price, Rupiah::zero());
        assert_eq!(inputs.labor_cost, Rupiah::zero());
        assert_eq!(inputs.shipping_cost, Rupiah::zero());
        assert_eq!(inputs.shipping_weight_kg, Decimal::ZERO);
    }

    #[test]
    fn test_to_inputs_unknown_tier() {
        let form = CalculationForm {
            tier: "750g".to_string(),
            ..CalculationForm::default()
        };
        assert_eq!(
            form.to_inputs().unwrap_err(),
            CoreError::UnknownPackagingTier {
                key: "750g".to_string()
            }
        );
    }

    #[test]
    fn test_partial_json_form() {
        let form: CalculationForm = serde_json::from_str(
            r#"{"ingredients":[{"name":"Bumbu","price":"2500"}],"tier":"500g"}"#,
        )
        .unwrap();
        assert_eq!(form.ingredients[0].unit, Unit::Gram);
        assert!(form.labor_cost.is_empty());

        let inputs = form.to_inputs().unwrap();
        assert_eq!(inputs.ingredients[0].price, Rupiah::from_whole(2500));
        assert_eq!(inputs.tier, TierId::Grams500);
    }
}
