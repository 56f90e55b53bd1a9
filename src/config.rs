//! Command-line configuration.

use crate::decimal::Amount;
use crate::edit::parse_tax_rate;
use crate::error::{LedgerError, Result};
use std::path::PathBuf;

/// Settings for one run of the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Transaction file to import.
    pub input: PathBuf,

    /// Percentage rate; when set, a tax summary is printed.
    pub tax_rate: Option<Amount>,

    /// Drop zero-profit records after profits are calculated.
    pub remove_zero_profit: bool,

    /// Where to save the (possibly filtered) records.
    pub export: Option<PathBuf>,
}

impl Config {
    /// Parses arguments, excluding the program name.
    ///
    /// ```text
    /// <input> [--tax-rate <percent>] [--remove-zero-profit] [--export <path>]
    /// ```
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut tax_rate = None;
        let mut remove_zero_profit = false;
        let mut export = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tax-rate" => {
                    let value = args
                        .next()
                        .ok_or_else(|| LedgerError::UnexpectedArgument(arg.clone()))?;
                    tax_rate = Some(parse_tax_rate(&value)?);
                }
                "--export" => {
                    let value = args
                        .next()
                        .ok_or_else(|| LedgerError::UnexpectedArgument(arg.clone()))?;
                    export = Some(PathBuf::from(value));
                }
                "--remove-zero-profit" => remove_zero_profit = true,
                flag if flag.starts_with("--") => {
                    return Err(LedgerError::UnexpectedArgument(flag.to_string()));
                }
                _ if input.is_none() => input = Some(PathBuf::from(&arg)),
                _ => return Err(LedgerError::UnexpectedArgument(arg.clone())),
            }
        }

        Ok(Config {
            input: input.ok_or(LedgerError::MissingArgument)?,
            tax_rate,
            remove_zero_profit,
            export,
        })
    }
}
