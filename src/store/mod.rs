//! Account store: the authoritative map from account id to balance.
//!
//! The store serializes all mutating access per account pair. Accounts are
//! seeded once at construction and live for the lifetime of the store, so the
//! map itself is never locked; only the per-account mutexes are. Transfers
//! over disjoint account pairs therefore run fully in parallel, while
//! transfers sharing an account serialize on that account's lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::Amount;
use crate::model::{AccountId, TransferReceipt};

mod state;
pub use state::Account;

mod error;
pub use error::{RequestError, SeedError, TransferError};

/// Process-scoped account store. Created once at startup with the initial
/// account set; shared between callers behind an `Arc`.
pub struct AccountStore {
    accounts: HashMap<AccountId, Arc<Mutex<Account>>>,
}

impl AccountStore {
    /// Build a store from the initial account set. Duplicate ids and negative
    /// seed balances are rejected, so `balance >= 0` holds from the first
    /// observable state on.
    pub fn from_accounts(initial: impl IntoIterator<Item = Account>) -> Result<Self, SeedError> {
        let mut accounts = HashMap::new();
        for account in initial {
            if account.balance < Amount::ZERO {
                return Err(SeedError::NegativeBalance(account.id, account.balance));
            }
            let id = account.id;
            if accounts.insert(id, Arc::new(Mutex::new(account))).is_some() {
                return Err(SeedError::DuplicateId(id));
            }
        }
        Ok(Self { accounts })
    }

    /// Latest committed balance of one account, or `None` if the id is
    /// unknown. Blocks at most for the critical section of a transfer
    /// touching this account.
    pub fn get_balance(&self, id: AccountId) -> Option<Amount> {
        let slot = self.accounts.get(&id)?;
        // Both balances of a transfer are written back with no intervening
        // panic point, so even a poisoned lock holds committed state.
        let guard = slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(guard.balance)
    }

    /// Atomically move `amount` from `source` to `destination`.
    ///
    /// Locks the pair in ascending id order, independent of which side is the
    /// source, so concurrent opposite-direction transfers over the same pair
    /// cannot deadlock. The sufficient-funds check, the debit and the credit
    /// all happen inside the same critical section; a failed transfer mutates
    /// nothing.
    pub fn try_apply_transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Amount,
    ) -> Result<TransferReceipt, TransferError> {
        // Re-validate even though the façade already did; the store is the
        // last line of defense for callers that skip validation.
        if !amount.is_positive() {
            return Err(RequestError::NonPositiveAmount(amount).into());
        }
        if source == destination {
            return Err(RequestError::SameAccount(source).into());
        }

        let src_slot = self
            .accounts
            .get(&source)
            .ok_or(TransferError::AccountNotFound(source))?;
        let dst_slot = self
            .accounts
            .get(&destination)
            .ok_or(TransferError::AccountNotFound(destination))?;

        let source_is_lower = source < destination;
        let (first_slot, second_slot) = if source_is_lower {
            (src_slot, dst_slot)
        } else {
            (dst_slot, src_slot)
        };

        let mut first = lock_account(first_slot)?;
        let mut second = lock_account(second_slot)?;
        let (src, dst) = if source_is_lower {
            (&mut *first, &mut *second)
        } else {
            (&mut *second, &mut *first)
        };

        if src.balance < amount {
            return Err(TransferError::InsufficientFunds(source, src.balance, amount));
        }

        // Compute both new balances before writing either back, so there is
        // no panic point between the two writes.
        let mut source_balance = src.balance;
        source_balance -= amount;
        let mut destination_balance = dst.balance;
        destination_balance += amount;
        src.balance = source_balance;
        dst.balance = destination_balance;

        Ok(TransferReceipt {
            source_balance,
            destination_balance,
        })
        // guards drop here, releasing in reverse acquisition order
    }

    /// Clone of every account, ordered by id. Locks each account briefly;
    /// intended for reporting after the transfer stream has drained.
    pub fn snapshot(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .values()
            .map(|slot| {
                slot.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .clone()
            })
            .collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Sum of all balances. Not atomic across accounts; only meaningful when
    /// no transfer is in flight (tests use it to check conservation).
    pub fn total_funds(&self) -> Amount {
        self.snapshot()
            .into_iter()
            .fold(Amount::ZERO, |sum, account| sum + account.balance)
    }
}

fn lock_account(slot: &Mutex<Account>) -> Result<MutexGuard<'_, Account>, TransferError> {
    slot.lock()
        .map_err(|_| TransferError::Internal("account lock poisoned".to_string()))
}
