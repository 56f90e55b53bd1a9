//! # Tax Ledger
//!
//! Imports sales transaction files, checks each record's integrity checksum,
//! computes per-line profit, and derives the tax due on net profit.
//!
//! ## Pipeline
//!
//! 1. [`import_file`]: parse seven-field comma-separated lines, silently
//!    dropping malformed ones
//! 2. [`validate`]: checksum, item code charset and price sign checks
//! 3. [`calculate_profits`]: `sale * qty * (1 - discount/100) - internal * qty`
//! 4. [`remove_zero_profit`]: optional filter
//! 5. [`aggregate`]: profit, loss, net profit and tax over valid records
//!
//! Each stage is a plain function over `&mut [Transaction]` or
//! `&[Transaction]`; [`Ledger`] bundles them around an owned record list for
//! front ends.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use tax_ledger::{Amount, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger
//!     .import_reader(Cursor::new("B001,ITEM1,10.0,15.0,2,0.0,62\n"))
//!     .unwrap();
//! ledger.validate();
//! ledger.calculate_profits();
//!
//! let summary = ledger.calculate_tax(Amount::from(10)).unwrap();
//! assert_eq!(summary.tax, Amount::from(1));
//! ```

pub mod checksum;
pub mod config;
pub mod decimal;
pub mod edit;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod profit;
pub mod tax;
pub mod transaction;
pub mod validation;

pub use checksum::checksum;
pub use config::Config;
pub use decimal::Amount;
pub use edit::{apply_edit, parse_tax_rate, EditFields, EditForm};
pub use error::{LedgerError, Result};
pub use export::{export_file, write_csv, write_report};
pub use import::{import_file, import_reader};
pub use ledger::{Ledger, LedgerSummary};
pub use profit::{calculate_profits, profit_of, remove_zero_profit};
pub use tax::{aggregate, TaxSummary};
pub use transaction::{RawTransaction, Status, Transaction, ValidationFailure};
pub use validation::{validate, ValidationCounts};
