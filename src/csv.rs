//! CSV boundary: the accounts seed file, the transfer instruction file and
//! the final balance report.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::model::{AccountId, RawTransfer};
use crate::store::Account;
use crate::Amount;

/// Errors that can occur reading or writing csv files
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open csv file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("failed to write csv output: {0}")]
    Write(#[source] csv::Error),
}

#[derive(Debug, Deserialize)]
struct AccountRow {
    id: AccountId,
    name: String,
    balance: f64,
}

#[derive(Debug, Deserialize)]
struct TransferRow {
    source: Option<AccountId>,
    destination: Option<AccountId>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    id: AccountId,
    name: String,
    balance: String,
}

/// Read the initial account set from a csv file (`id,name,balance`).
pub fn read_accounts(path: impl AsRef<Path>) -> Result<Vec<Account>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    reader
        .into_deserialize::<AccountRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            Ok(Account::new(
                row.id,
                row.name,
                Amount::from_float(row.balance),
            ))
        })
        .collect()
}

/// Read transfer instructions from a csv file (`source,destination,amount`).
///
/// Rows deserialize into [`RawTransfer`] without validation; empty fields
/// simply come out as `None` and are left for the façade to reject.
pub fn read_transfers(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<RawTransfer, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<TransferRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            Ok(RawTransfer {
                source: row.source,
                destination: row.destination,
                amount: row.amount,
            })
        }))
}

/// Write the final account balances to stdout in csv format
pub fn write_accounts(accounts: impl IntoIterator<Item = Account>) -> Result<(), CsvError> {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for account in accounts {
        let row = OutputRow {
            id: account.id,
            name: account.name,
            balance: account.balance.to_string(),
        };
        writer.serialize(&row).map_err(CsvError::Write)?;
    }

    writer.flush().map_err(|e| CsvError::Write(e.into()))?;
    Ok(())
}
