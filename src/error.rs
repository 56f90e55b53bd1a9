//! Error types for the tax ledger.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while importing, editing, or aggregating transactions.
///
/// Per-record validation failures are not errors; they are recorded in
/// [`Status`](crate::transaction::Status).
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open, read, or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// User-supplied text could not be parsed as a number
    #[error("Invalid numeric input for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A valid transaction was aggregated before its profit was calculated
    #[error("Profit has not been calculated for bill {bill_number}")]
    ProfitNotCalculated { bill_number: String },

    /// An operation needing profits ran before any profit was calculated
    #[error("Please calculate profit first")]
    NoProfitsCalculated,

    /// Export was requested for an empty ledger
    #[error("No transactions to save")]
    NoTransactions,

    /// Row index outside the ledger
    #[error("Transaction index {index} out of range (ledger has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Decimal arithmetic exceeded the representable range
    #[error("Arithmetic overflow while aggregating")]
    Overflow,

    /// Missing input file argument
    #[error("Missing input file argument. Usage: tax-ledger <input> [--tax-rate <percent>] [--remove-zero-profit] [--export <path>]")]
    MissingArgument,

    /// Unknown or incomplete command-line argument
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}
