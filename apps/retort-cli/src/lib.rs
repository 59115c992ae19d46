//! # Retort CLI Library
//!
//! Library half of the `retort-hpp` binary. Everything except process
//! setup lives here so commands can be driven from tests with in-memory
//! readers and writers.
//!
//! ## Module Organization
//! ```text
//! retort_cli/
//! ├── lib.rs          ◄─── You are here (startup, error reporting)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── CliError, ErrorCode, ErrorReport
//! └── commands/
//!     ├── mod.rs      ◄─── Argument parsing and dispatch
//!     ├── calculate.rs◄─── HPP calculation
//!     └── tiers.rs    ◄─── Packaging tier table
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{execute, Command};
use config::{CliConfig, OutputFormat, DEFAULT_LOG_FILTER};
use error::{CliError, ErrorCode, ErrorReport};

/// Runs the CLI against the process arguments and standard streams.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       CLI Startup                                       │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • RETORT_OUTPUT, RETORT_CURRENCY_SYMBOL, RETORT_LOG                 │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr                                      │
/// │     • RUST_LOG, then RETORT_LOG, then "info,retort=debug"               │
/// │                                                                         │
/// │  3. Parse Arguments ──────────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Execute Command ──────────────────────────────────────────────────► │
/// │     • Result on stdout, ErrorReport on stderr                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Logging is not up yet
            report(&CliError::from(err), OutputFormat::Text);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    info!(output = %config.output, "Starting retort HPP calculator");

    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            warn!(error = %err, "Invalid command line");
            report(&err, config.output);
            return ExitCode::FAILURE;
        }
    };

    let output = if command.wants_json() {
        OutputFormat::Json
    } else {
        config.output
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match execute(&command, &config, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.code() {
                ErrorCode::Internal | ErrorCode::IoError => error!(error = %err, "Command failed"),
                code => warn!(code = code.as_str(), error = %err, "Command rejected"),
            }
            report(&err, output);
            ExitCode::FAILURE
        }
    }
}

/// Writes an [`ErrorReport`] to stderr.
///
/// JSON output gets a JSON report; text output gets `error[CODE]: message`.
pub fn report(err: &CliError, output: OutputFormat) {
    let report = ErrorReport::from(err);
    let mut stderr = io::stderr().lock();
    // Best effort: nowhere left to report a failed stderr write
    let _ = write_report(&mut stderr, &report, output);
}

fn write_report(
    out: &mut dyn Write,
    report: &ErrorReport,
    output: OutputFormat,
) -> io::Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)
        }
        OutputFormat::Text => writeln!(out, "error[{}]: {}", report.code.as_str(), report.message),
    }
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
