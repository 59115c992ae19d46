//! # Domain Types
//!
//! Core domain types for the retort HPP calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ IngredientCost  │   │  PackagingTier  │   │ CalculationRes. │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id (TierId)    │   │  materials_cost │       │
//! │  │  price          │   │  service price  │   │  total_cost     │       │
//! │  │  weight, unit   │   │  units/batch    │   │  cost_per_unit  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Unit       │   │     TierId      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  gram, kg       │   │  100g (75 pcs)  │                             │
//! │  │  liter, ml, pcs │   │  250g (45 pcs)  │                             │
//! │  └─────────────────┘   │  500g (20 pcs)  │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Rupiah;

// =============================================================================
// Unit
// =============================================================================

/// Measurement unit of an ingredient quantity.
///
/// Serialized with the short labels used by the form's unit selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    #[default]
    #[serde(rename = "gram")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "liter")]
    Liter,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    /// All units, in selector order.
    pub const ALL: [Unit; 5] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Piece,
    ];

    /// Short label shown in the unit selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kg",
            Unit::Liter => "liter",
            Unit::Milliliter => "ml",
            Unit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Ingredient Cost
// =============================================================================

/// One raw ingredient and its cost contribution to the batch.
///
/// ## Descriptive Fields
/// `weight` and `unit` are recorded for the operator's reference only. The
/// cost formula uses `price` as the ingredient's total cost for the batch and
/// does not normalize it by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCost {
    pub name: String,

    /// Cost of this ingredient for the whole batch.
    #[ts(as = "String")]
    pub price: Rupiah,

    /// Quantity bought (descriptive).
    #[ts(as = "String")]
    pub weight: Decimal,

    /// Unit of `weight` (descriptive).
    pub unit: Unit,
}

impl IngredientCost {
    pub fn new(name: impl Into<String>, price: Rupiah) -> Self {
        IngredientCost {
            name: name.into(),
            price,
            weight: Decimal::ZERO,
            unit: Unit::default(),
        }
    }

    /// Builder: records the purchased quantity.
    pub fn with_quantity(mut self, weight: Decimal, unit: Unit) -> Self {
        self.weight = weight;
        self.unit = unit;
        self
    }
}

// =============================================================================
// Packaging Tier
// =============================================================================

/// Identifier of one of the three retort packaging tiers.
///
/// Serialized as its form key; exported to TypeScript as `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TierId {
    Grams100,
    Grams250,
    Grams500,
}

impl TierId {
    /// Accepted keys, in table order.
    pub const KEYS: [&'static str; 3] = ["100g", "250g", "500g"];

    /// The form key (`"100g"`, `"250g"`, `"500g"`).
    pub const fn key(&self) -> &'static str {
        match self {
            TierId::Grams100 => "100g",
            TierId::Grams250 => "250g",
            TierId::Grams500 => "500g",
        }
    }
}

impl Default for TierId {
    fn default() -> Self {
        TierId::Grams100
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TierId {
    type Err = CoreError;

    /// Total lookup: exactly the three known keys, anything else is an error.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "100g" => Ok(TierId::Grams100),
            "250g" => Ok(TierId::Grams250),
            "500g" => Ok(TierId::Grams500),
            other => Err(CoreError::UnknownPackagingTier {
                key: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TierId {
    type Error = CoreError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl From<TierId> for String {
    fn from(id: TierId) -> Self {
        id.key().to_string()
    }
}

/// A retort service configuration: price per packed unit and batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PackagingTier {
    #[ts(as = "String")]
    pub id: TierId,

    /// Retort service fee per packed unit.
    #[ts(as = "String")]
    pub service_price_per_unit: Rupiah,

    /// Units produced by one batch.
    pub units_per_batch: u32,
}

/// The compiled-in tier table. Not user-editable.
pub static PACKAGING_TIERS: [PackagingTier; 3] = [
    PackagingTier {
        id: TierId::Grams100,
        service_price_per_unit: Rupiah::new(Decimal::from_parts(5100, 0, 0, false, 0)),
        units_per_batch: 75,
    },
    PackagingTier {
        id: TierId::Grams250,
        service_price_per_unit: Rupiah::new(Decimal::from_parts(8000, 0, 0, false, 0)),
        units_per_batch: 45,
    },
    PackagingTier {
        id: TierId::Grams500,
        service_price_per_unit: Rupiah::new(Decimal::from_parts(11500, 0, 0, false, 0)),
        units_per_batch: 20,
    },
];

impl PackagingTier {
    /// Returns the table entry for a tier id.
    pub fn get(id: TierId) -> &'static PackagingTier {
        match id {
            TierId::Grams100 => &PACKAGING_TIERS[0],
            TierId::Grams250 => &PACKAGING_TIERS[1],
            TierId::Grams500 => &PACKAGING_TIERS[2],
        }
    }

    /// Resolves a form key to its table entry.
    ///
    /// ## Example
    /// ```rust
    /// use retort_core::PackagingTier;
    ///
    /// let tier = PackagingTier::lookup("250g").unwrap();
    /// assert_eq!(tier.units_per_batch, 45);
    ///
    /// assert!(PackagingTier::lookup("300g").is_err());
    /// ```
    pub fn lookup(key: &str) -> CoreResult<&'static PackagingTier> {
        key.parse::<TierId>().map(PackagingTier::get)
    }

    /// All tiers, in selector order.
    pub fn all() -> &'static [PackagingTier] {
        &PACKAGING_TIERS
    }

    /// Selector label, e.g. `Kemasan 100g (75 pcs)`.
    pub fn label(&self) -> String {
        format!("Kemasan {} ({} pcs)", self.id, self.units_per_batch)
    }
}

// =============================================================================
// Calculation Inputs
// =============================================================================

/// Everything the engine needs for one calculation, already parsed.
///
/// Built fresh per request, usually by [`crate::form::CalculationForm::to_inputs`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInputs {
    /// Ingredients in entry order.
    pub ingredients: Vec<IngredientCost>,

    #[ts(as = "String")]
    pub labor_cost: Rupiah,

    /// Shipping cost before any discount.
    #[ts(as = "String")]
    pub shipping_cost: Rupiah,

    #[ts(as = "String")]
    pub shipping_weight_kg: Decimal,

    #[ts(as = "String")]
    pub tier: TierId,
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Output of one calculation. Values are exact; round only when displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Sum of all ingredient prices.
    #[ts(as = "String")]
    pub materials_cost: Rupiah,

    #[ts(as = "String")]
    pub labor_cost: Rupiah,

    /// Shipping cost after the weight discount.
    #[ts(as = "String")]
    pub shipping_cost: Rupiah,

    /// materials + labor + shipping.
    #[ts(as = "String")]
    pub production_cost: Rupiah,

    /// Tier price per unit × units per batch.
    #[ts(as = "String")]
    pub retort_service_cost: Rupiah,

    /// production + retort service.
    #[ts(as = "String")]
    pub total_cost: Rupiah,

    pub units_produced: u32,

    /// HPP: total cost ÷ units produced.
    #[ts(as = "String")]
    pub cost_per_unit: Rupiah,

    /// HPP × 1.25.
    #[ts(as = "String")]
    pub selling_price_per_unit: Rupiah,
}

// =============================================================================
// Unit Tests
// =============================================================================
