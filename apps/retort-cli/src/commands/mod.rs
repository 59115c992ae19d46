//! # CLI Commands Module
//!
//! Every subcommand the `retort-hpp` binary understands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (argument parsing, dispatch)
//! ├── calculate.rs  ◄─── Form → pricing engine → result
//! └── tiers.rs      ◄─── Packaging tier table
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ retort-hpp calculate form.json --json                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::from_args(["calculate", "form.json", "--json"])               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::Calculate { source: File("form.json"), json: true }           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  execute(command, &config, stdin, stdout) -> Result<(), CliError>       │
//! │         │                                                               │
//! │         ├── Ok  → output already on stdout, exit 0                      │
//! │         └── Err → ErrorReport on stderr, exit 1                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculate;
pub mod tiers;

use std::io::{Read, Write};
use std::path::PathBuf;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

use calculate::FormSource;

/// Help text printed by `retort-hpp help`.
pub const USAGE: &str = "\
Kalkulator HPP Retort

Usage:
  retort-hpp calculate [PATH|-] [--json]   Compute HPP from a form (stdin when PATH is - or omitted)
  retort-hpp tiers [--json]                List packaging tiers
  retort-hpp help                          Show this message

Environment:
  RETORT_OUTPUT            text (default) or json
  RETORT_CURRENCY_SYMBOL   currency prefix for display (default: Rp)
  RETORT_LOG / RUST_LOG    tracing filter
";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Calculate { source: FormSource, json: bool },
    Tiers { json: bool },
    Help,
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        match name.as_str() {
            "help" | "-h" | "--help" => Ok(Command::Help),
            "tiers" => {
                let (json, positional) = split_flags(rest)?;
                if let Some(extra) = positional.first() {
                    return Err(CliError::Usage(format!("unexpected argument: {extra}")));
                }
                Ok(Command::Tiers { json })
            }
            "calculate" => {
                let (json, positional) = split_flags(rest)?;
                let source = match positional.as_slice() {
                    [] => FormSource::Stdin,
                    [path] if path.as_str() == "-" => FormSource::Stdin,
                    [path] => FormSource::File(PathBuf::from(path.as_str())),
                    [_, extra, ..] => {
                        return Err(CliError::Usage(format!("unexpected argument: {extra}")))
                    }
                };
                Ok(Command::Calculate { source, json })
            }
            other => Err(CliError::Usage(format!("unknown command: {other}"))),
        }
    }

    /// Whether the command asked for JSON output on the command line.
    pub fn wants_json(&self) -> bool {
        match self {
            Command::Calculate { json, .. } | Command::Tiers { json } => *json,
            Command::Help => false,
        }
    }
}

/// Separates `--json` from positional arguments. `-` counts as positional.
fn split_flags(args: &[String]) -> Result<(bool, Vec<&String>), CliError> {
    let mut json = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::Usage(format!("unknown flag: {flag}")));
            }
            _ => positional.push(arg),
        }
    }

    Ok((json, positional))
}

/// Runs `command`, writing its output to `out`.
///
/// A `--json` flag overrides the configured output format.
pub fn execute(
    command: &Command,
    config: &CliConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let effective;
    let config = if command.wants_json() {
        effective = CliConfig {
            output: OutputFormat::Json,
            ..config.clone()
        };
        &effective
    } else {
        config
    };

    match command {
        Command::Calculate { source, .. } => calculate::run(source, config, stdin, out),
        Command::Tiers { .. } => tiers::run(config, out),
        Command::Help => out
            .write_all(USAGE.as_bytes())
            .map_err(|e| CliError::io("<stdout>", e)),
    }
}
