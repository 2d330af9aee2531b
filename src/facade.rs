//! Transfer façade: shape validation in front of the account store.
//!
//! The façade rejects malformed requests without touching shared state and
//! otherwise delegates to the store, passing its result through unchanged.
//! It is not a concurrency primitive; the store owns all locking.

use std::sync::Arc;

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::model::{AccountId, RawTransfer, TransferReceipt, TransferRequest};
use crate::store::{Account, AccountStore, RequestError, TransferError};

/// Entry point for external callers: validates requests and queries, then
/// delegates to the shared [`AccountStore`].
pub struct TransferService {
    store: Arc<AccountStore>,
}

impl TransferService {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    /// Balance of one account, or `AccountNotFound`.
    pub fn balance(&self, id: AccountId) -> Result<Amount, TransferError> {
        self.store
            .get_balance(id)
            .ok_or(TransferError::AccountNotFound(id))
    }

    /// Clone of every account, ordered by id.
    pub fn snapshot(&self) -> Vec<Account> {
        self.store.snapshot()
    }

    /// Validate a raw request and apply it. Malformed input fails fast as
    /// `InvalidRequest` with no store access at all.
    pub fn transfer(&self, raw: RawTransfer) -> Result<TransferReceipt, TransferError> {
        let request = validate(raw)?;
        self.store
            .try_apply_transfer(request.source, request.destination, request.amount)
    }

    /// Drain a stream of raw transfer instructions, applying each in arrival
    /// order. Rejected transfers are logged and skipped; they never stop the
    /// stream.
    pub async fn run(&self, mut stream: impl Stream<Item = RawTransfer> + Unpin) {
        while let Some(raw) = stream.next().await {
            let result = self.transfer(raw.clone());
            log_result(&raw, &result);
        }
    }
}

/// Check presence and shape of every field before the store is involved.
fn validate(raw: RawTransfer) -> Result<TransferRequest, RequestError> {
    let source = raw.source.ok_or(RequestError::MissingField("source_id"))?;
    let destination = raw
        .destination
        .ok_or(RequestError::MissingField("destination_id"))?;
    let amount = raw.amount.ok_or(RequestError::MissingField("amount"))?;

    if !amount.is_finite() {
        return Err(RequestError::MalformedAmount);
    }
    let amount = Amount::from_float(amount);
    if !amount.is_positive() {
        return Err(RequestError::NonPositiveAmount(amount));
    }
    if source == destination {
        return Err(RequestError::SameAccount(source));
    }

    Ok(TransferRequest {
        source,
        destination,
        amount,
    })
}

/// Small helper to log transfer outcomes
fn log_result(raw: &RawTransfer, result: &Result<TransferReceipt, TransferError>) {
    match result {
        Ok(receipt) => {
            info!(
                source = ?raw.source,
                destination = ?raw.destination,
                source_balance = %receipt.source_balance,
                destination_balance = %receipt.destination_balance,
                "transfer committed"
            );
        }
        Err(e) => {
            info!(
                source = ?raw.source,
                destination = ?raw.destination,
                code = e.code(),
                reason = %e,
                "transfer rejected"
            );
        }
    }
}
