//! # Retort HPP Calculator Entry Point
//!
//! ```text
//! $ retort-hpp calculate form.json
//! Total Biaya Bahan Baku:              Rp 10.000
//! ...
//! HPP per pcs:                          Rp 5.327
//! Harga Jual per pcs (25% margin):      Rp 6.658
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs so it can be tested
    retort_cli::run()
}
