//! # Calculate Command
//!
//! Reads a calculator form, runs the pricing engine, prints the result.
//!
//! ## Flow
//! ```text
//! form.json / stdin ──► CalculationForm ──► PricingEngine::compute_form
//!                                                   │
//!                          ┌────────────────────────┴──────────┐
//!                          ▼                                   ▼
//!                   text table (Rp ...)              JSON { result, formatted }
//! ```

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use retort_core::parse::try_parse_amount;
use retort_core::{CalculationForm, CalculationResult, FormattedResult, PricingEngine};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Where the form comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSource {
    Stdin,
    File(PathBuf),
}

impl FormSource {
    fn describe(&self) -> String {
        match self {
            FormSource::Stdin => "<stdin>".to_string(),
            FormSource::File(path) => path.display().to_string(),
        }
    }
}

/// JSON output: exact values next to their display strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutput<'a> {
    pub tier: &'a str,
    pub result: &'a CalculationResult,
    pub formatted: FormattedResult,
}

/// Runs the `calculate` command.
pub fn run(
    source: &FormSource,
    config: &CliConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let form = read_form(source, stdin)?;
    debug!(
        source = %source.describe(),
        ingredients = form.ingredients.len(),
        tier = %form.tier,
        "Form loaded"
    );

    warn_on_zero_fallbacks(&form);

    let result = PricingEngine::new().compute_form(&form)?;
    info!(
        tier = %form.tier.trim(),
        total_cost = %result.total_cost,
        cost_per_unit = %result.cost_per_unit,
        units = result.units_produced,
        "Calculation complete"
    );

    let formatted = FormattedResult::with_symbol(&result, &config.currency_symbol);
    match config.output {
        OutputFormat::Text => write_text(out, &formatted),
        OutputFormat::Json => {
            let output = CalculationOutput {
                tier: form.tier.trim(),
                result: &result,
                formatted,
            };
            write_json(out, &output)
        }
    }
}

/// Reads and deserializes the form.
pub fn read_form(source: &FormSource, stdin: &mut dyn Read) -> Result<CalculationForm, CliError> {
    let raw = match source {
        FormSource::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|e| CliError::io(source.describe(), e))?;
            buf
        }
        FormSource::File(path) => {
            fs::read_to_string(path).map_err(|e| CliError::io(source.describe(), e))?
        }
    };

    serde_json::from_str(&raw).map_err(CliError::InvalidForm)
}

/// Logs every non-blank numeric field that the engine will count as zero.
fn warn_on_zero_fallbacks(form: &CalculationForm) {
    for (index, entry) in form.ingredients.iter().enumerate() {
        if try_parse_amount(&entry.price).is_none() {
            warn!(row = index, field = "price", value = %entry.price, "Non-numeric value counted as zero");
        }
        if try_parse_amount(&entry.weight).is_none() {
            warn!(row = index, field = "weight", value = %entry.weight, "Non-numeric value counted as zero");
        }
    }

    let fields = [
        ("laborCost", &form.labor_cost),
        ("shippingCost", &form.shipping_cost),
        ("shippingWeightKg", &form.shipping_weight_kg),
    ];
    for (field, value) in fields {
        if try_parse_amount(value).is_none() {
            warn!(field, value = %value, "Non-numeric value counted as zero");
        }
    }
}

/// Renders the result as the calculator's summary table.
pub fn write_text(out: &mut dyn Write, formatted: &FormattedResult) -> Result<(), CliError> {
    let units = format!("{} pcs", formatted.units_produced);
    let rows: [(&str, &str); 9] = [
        ("Total Biaya Bahan Baku", formatted.materials_cost.as_str()),
        ("Biaya Tenaga Kerja", formatted.labor_cost.as_str()),
        ("Biaya Pengiriman", formatted.shipping_cost.as_str()),
        ("Total Biaya Produksi", formatted.production_cost.as_str()),
        ("Biaya Jasa Retort", formatted.retort_service_cost.as_str()),
        ("Total Biaya Keseluruhan", formatted.total_cost.as_str()),
        ("Jumlah Produk", units.as_str()),
        ("HPP per pcs", formatted.cost_per_unit.as_str()),
        ("Harga Jual per pcs (25% margin)", formatted.selling_price_per_unit.as_str()),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (label, value) in rows {
        writeln!(
            out,
            "{:<label_width$} {:>value_width$}",
            format!("{label}:"),
            value,
        )
        .map_err(|e| CliError::io("<stdout>", e))?;
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(CliError::Encode)?;
    writeln!(out).map_err(|e| CliError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FORM_A: &str = r#"{
        "ingredients": [{ "name": "Rendang", "weight": "1", "unit": "kg", "price": "10000" }],
        "laborCost": "5000",
        "shippingCost": "2000",
        "shippingWeightKg": "1",
        "tier": "100g"
    }"#;

    fn run_with(form: &str, config: &CliConfig) -> Result<String, CliError> {
        let mut stdin = Cursor::new(form.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&FormSource::Stdin, config, &mut stdin, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        let text = run_with(FORM_A, &CliConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("Total Biaya Bahan Baku:"));
        assert!(lines[0].ends_with("Rp 10.000"));
        assert!(lines[5].ends_with("Rp 399.500"));
        assert!(lines[6].ends_with("75 pcs"));
        assert!(lines[7].ends_with("Rp 5.327"));
        assert!(lines[8].ends_with("Rp 6.658"));
    }

    #[test]
    fn test_json_output() {
        let config = CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        };
        let text = run_with(FORM_A, &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["tier"], "100g");
        assert_eq!(json["result"]["totalCost"], "399500");
        assert_eq!(json["result"]["unitsProduced"], 75);
        assert_eq!(json["formatted"]["costPerUnit"], "Rp 5.327");
        assert_eq!(json["formatted"]["shippingCost"], "Rp 2.000");
    }

    #[test]
    fn test_custom_currency_symbol() {
        let config = CliConfig {
            currency_symbol: "IDR".to_string(),
            ..CliConfig::default()
        };
        let text = run_with(FORM_A, &config).unwrap();
        assert!(text.lines().next().unwrap().ends_with("IDR 10.000"));
    }

    #[test]
    fn test_unknown_tier_is_reported() {
        let err = run_with(r#"{"tier":"300g"}"#, &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = run_with("{ not json", &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidForm(_)));
    }

    #[test]
    fn test_missing_file() {
        let source = FormSource::File(PathBuf::from("/nonexistent/retort/form.json"));
        let err = read_form(&source, &mut std::io::empty()).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_read_form_from_file() {
        let path = std::env::temp_dir().join(format!("retort-form-{}.json", std::process::id()));
        fs::write(&path, FORM_A).unwrap();

        let form = read_form(&FormSource::File(path.clone()), &mut std::io::empty()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(form.ingredients.len(), 1);
        assert_eq!(form.ingredients[0].price, "10000");
        assert_eq!(form.tier, "100g");
    }
}
