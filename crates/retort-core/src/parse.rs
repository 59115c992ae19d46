//! # Parse Module
//!
//! Fail-soft parsing of the calculator's numeric form fields.
//!
//! ## Parsing Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Numeric Form Fields                                │
//! │                                                                         │
//! │  Operator is still typing ──► field is "", "1.", "abc", ...            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  parse_amount() ← THIS MODULE                                          │
//! │  ├── blank            → 0                                              │
//! │  ├── "12500", "12.5"  → exact decimal                                  │
//! │  ├── "1.5e3"          → 1500                                           │
//! │  ├── |value| > 10^18  → 0                                              │
//! │  └── anything else    → 0   (never an error)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Result updates on every keystroke without error popups                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tier key is the exception: it comes from a fixed selector, so an
//! unknown key is a broken contract and surfaces as
//! [`CoreError::UnknownPackagingTier`](crate::CoreError::UnknownPackagingTier).

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::money::Rupiah;
use crate::types::TierId;

/// Largest accepted magnitude for a numeric field (10^18 rupiah).
///
/// Keeps every sum and scale step of the engine inside `Decimal` range.
pub const MAX_FORM_AMOUNT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// Parses a numeric form field, substituting zero for blank or non-numeric input.
///
/// ## Example
/// ```rust
/// use retort_core::parse::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("12500"), dec!(12500));
/// assert_eq!(parse_amount(" 2.5 "), dec!(2.5));
/// assert_eq!(parse_amount(""), dec!(0));
/// assert_eq!(parse_amount("dua ribu"), dec!(0));
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    try_parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Parses a numeric form field, returning `None` where [`parse_amount`] would
/// substitute zero for non-blank input.
///
/// Blank input is `Some(0)`: an empty field is an expected state, not a typo.
/// Values beyond [`MAX_FORM_AMOUNT`] in either direction are `None`.
pub fn try_parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .filter(|value| value.abs() <= MAX_FORM_AMOUNT)
}

/// Parses a rupiah form field (fail-soft, see [`parse_amount`]).
pub fn parse_rupiah(raw: &str) -> Rupiah {
    Rupiah::new(parse_amount(raw))
}

/// Parses the packaging tier key. Surrounding whitespace is ignored; the key
/// itself must match exactly.
pub fn parse_tier_key(raw: &str) -> CoreResult<TierId> {
    raw.trim().parse()
}

// =============================================================================
// Unit Tests
// =============================================================================
