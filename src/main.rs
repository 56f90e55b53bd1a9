//! Tax Ledger CLI
//!
//! Imports a transaction file, validates it, calculates profits, and prints a
//! status report. With a tax rate, also prints the tax summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.txt --tax-rate 10 --remove-zero-profit --export clean.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to see validation counts and skipped lines

use log::{info, warn};
use std::env;
use std::io::{self, Write};
use std::process;
use tax_ledger::{aggregate, Config, Ledger, LedgerError, Result, TaxSummary};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;

    let mut ledger = Ledger::new();
    ledger.import_file(&config.input)?;
    ledger.validate();
    ledger.calculate_profits();

    if config.remove_zero_profit && ledger.has_profits() {
        let removed = ledger.remove_zero_profit()?;
        info!("Removed {} zero-profit transactions", removed);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    ledger.write_report(&mut handle)?;

    if let Some(rate) = config.tax_rate {
        let summary = aggregate(ledger.transactions(), rate)?;
        writeln!(handle)?;
        print_summary(&mut handle, &summary, &rate.fixed2())?;
    }

    handle.flush()?;

    if let Some(path) = &config.export {
        match ledger.export_file(path) {
            Err(LedgerError::NoTransactions) => {
                warn!("Nothing to export to {}: ledger is empty", path.display());
            }
            result => result?,
        }
    }

    Ok(())
}

fn print_summary<W: Write>(out: &mut W, summary: &TaxSummary, rate: &str) -> io::Result<()> {
    writeln!(out, "Total Profit: Rs.{}", summary.total_profit.fixed2())?;
    writeln!(out, "Total Loss: Rs.{}", summary.total_loss.fixed2())?;
    writeln!(out, "Net Profit: Rs.{}", summary.net_profit.fixed2())?;
    writeln!(
        out,
        "Tax Due: Rs.{} ({}% of Rs.{})",
        summary.tax.fixed2(),
        rate,
        summary.net_profit.fixed2()
    )
}
