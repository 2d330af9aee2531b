//! Core domain types for the ledger transfer service.

use crate::Amount;

/// Account identifier. Stable, assigned at creation, never reused.
pub type AccountId = u32;

/// A validated transfer instruction: move `amount` from `source` to
/// `destination`. Constructed only by the façade after shape validation;
/// the store re-checks `amount > 0` and `source != destination` anyway.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest {
    pub source: AccountId,
    pub destination: AccountId,
    pub amount: Amount,
}

/// A transfer instruction as it arrives from the outside, before any
/// validation. Fields are optional because callers may omit them.
#[derive(Debug, Clone, Default)]
pub struct RawTransfer {
    pub source: Option<AccountId>,
    pub destination: Option<AccountId>,
    pub amount: Option<f64>,
}

/// The two resulting balances of a committed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub source_balance: Amount,
    pub destination_balance: Amount,
}
