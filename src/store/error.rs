//! Error types for the account store and transfer processing.

use thiserror::Error;

use crate::Amount;
use crate::model::AccountId;

/// Failure of a transfer or balance query. Every variant guarantees that no
/// balance was mutated: a transfer either commits fully or not at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("insufficient funds in account {0}: balance {1}, requested {2}")]
    InsufficientFunds(AccountId, Amount, Amount),

    #[error("internal error: {0}")]
    Internal(String),
}

impl TransferError {
    /// Stable reason code distinguishing the four failure classes, for
    /// callers that report outcomes (logs, wire responses).
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidRequest(_) => "InvalidRequest",
            TransferError::AccountNotFound(_) => "AccountNotFound",
            TransferError::InsufficientFunds(..) => "InsufficientFunds",
            TransferError::Internal(_) => "InternalError",
        }
    }
}

/// Shape problems in a transfer request, detected before any shared state
/// is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("amount is not a finite number")]
    MalformedAmount,

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    #[error("source and destination are the same account ({0})")]
    SameAccount(AccountId),
}

/// Problems in the initial account set, detected at store construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate account id {0}")]
    DuplicateId(AccountId),

    #[error("account {0} seeded with negative balance {1}")]
    NegativeBalance(AccountId, Amount),
}
