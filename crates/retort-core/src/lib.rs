//! # retort-core: Pure Pricing Logic for the Retort HPP Calculator
//!
//! This crate computes the cost of goods (HPP, *Harga Pokok Produksi*) and a
//! suggested selling price for one batch of food packed through a retort
//! sterilization service. Every function is pure: no I/O, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Retort HPP Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Form Layer (web form / retort-cli)                │   │
//! │  │    Ingredients ──► Labor ──► Shipping ──► Packaging tier        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CalculationForm (strings)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ retort-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │  parse   │  │   form   │  │ pricing  │  │  format  │       │   │
//! │  │   │ fail-soft│─►│  inputs  │─►│  engine  │─►│  id-ID   │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ingredients, packaging tiers, inputs, results)
//! - [`money`] - `Rupiah` amount backed by exact decimal arithmetic
//! - [`parse`] - Fail-soft parsing of numeric form fields
//! - [`form`] - Raw, string-typed calculator form
//! - [`pricing`] - The `PricingEngine`
//! - [`format`] - Display-only currency formatting
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use retort_core::{CalculationForm, PricingEngine};
//!
//! let mut form = CalculationForm::new();
//! form.update_ingredient(0, retort_core::IngredientField::Price, "10000");
//! form.labor_cost = "5000".to_string();
//! form.shipping_cost = "2000".to_string();
//! form.shipping_weight_kg = "1".to_string();
//!
//! let result = PricingEngine::new().compute_form(&form).unwrap();
//! assert_eq!(result.units_produced, 75);
//! assert_eq!(result.total_cost.round_whole().to_string(), "399500");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod format;
pub mod money;
pub mod parse;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use form::{CalculationForm, IngredientEntry, IngredientField};
pub use format::{format_amount, format_rupiah, FormattedResult};
pub use money::Rupiah;
pub use pricing::PricingEngine;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

use rust_decimal::Decimal;

/// Shipments at or above this weight (kg) get the shipping discount.
pub const SHIPPING_DISCOUNT_THRESHOLD_KG: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Multiplier applied to shipping cost once the threshold is reached (20% off).
pub const SHIPPING_DISCOUNT_FACTOR: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Selling price = HPP × 1.25 (25% margin on cost).
pub const MARGIN_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Maximum fraction digits shown for non-rounded amounts (id-ID locale default).
pub const DISPLAY_FRACTION_DIGITS: u32 = 3;
