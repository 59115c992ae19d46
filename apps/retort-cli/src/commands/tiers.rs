//! # Tiers Command
//!
//! Prints the packaging tier table the calculator's selector offers.

use std::io::Write;

use serde::Serialize;

use retort_core::format::format_currency;
use retort_core::{PackagingTier, Rupiah};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// One tier as shown to the operator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRow {
    pub key: &'static str,
    pub label: String,
    pub service_price_per_unit: Rupiah,
    pub units_per_batch: u32,
    pub batch_service_cost: String,
}

impl TierRow {
    fn new(tier: &PackagingTier, symbol: &str) -> Self {
        TierRow {
            key: tier.id.key(),
            label: tier.label(),
            service_price_per_unit: tier.service_price_per_unit,
            units_per_batch: tier.units_per_batch,
            batch_service_cost: format_currency(
                tier.service_price_per_unit * tier.units_per_batch,
                symbol,
            ),
        }
    }
}

/// Runs the `tiers` command.
pub fn run(config: &CliConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let rows: Vec<TierRow> = PackagingTier::all()
        .iter()
        .map(|tier| TierRow::new(tier, &config.currency_symbol))
        .collect();

    match config.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows).map_err(CliError::Encode)?;
            writeln!(out).map_err(|e| CliError::io("<stdout>", e))
        }
        OutputFormat::Text => {
            for (tier, row) in PackagingTier::all().iter().zip(&rows) {
                writeln!(
                    out,
                    "{:<5} {:<22} {:>10} /pcs   batch {}",
                    row.key,
                    row.label,
                    format_currency(tier.service_price_per_unit, &config.currency_symbol),
                    row.batch_service_cost,
                )
                .map_err(|e| CliError::io("<stdout>", e))?;
            }
            Ok(())
        }
    }
}
