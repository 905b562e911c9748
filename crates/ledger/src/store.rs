//! In-memory ledger store: the single authority over balances and logs.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rust_decimal::Decimal;

use tinyledger_core::{AccountId, Aggregate, DomainError, DomainResult};

use crate::account::{Account, AccountCommand, AccountEvent, RecordTransaction};
use crate::transaction::{Transaction, TransactionType};

/// Thread-safe in-memory ledger.
///
/// One write lock covers check-then-update in `process_transaction`, so two
/// concurrent withdrawals can never both pass the funds check. State is only
/// mutated after validation succeeds, which makes a poisoned lock safe to
/// recover.
#[derive(Debug, Default)]
pub struct LedgerStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deposit or withdrawal and return the stored transaction.
    ///
    /// Deposits create the account on first use. Withdrawals require an
    /// existing account with balance >= amount.
    pub fn process_transaction(
        &self,
        account_id: &AccountId,
        kind: TransactionType,
        amount: Decimal,
        description: Option<String>,
    ) -> DomainResult<Transaction> {
        let cmd = AccountCommand::RecordTransaction(RecordTransaction {
            kind,
            amount,
            description,
            occurred_at: Utc::now(),
        });

        let mut accounts = self.write();

        let decided = match accounts.get(account_id) {
            Some(account) => account.handle(&cmd),
            None => Account::empty(account_id.clone()).handle(&cmd),
        };

        let events = match decided {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(account_id = %account_id, %kind, %amount, error = %e, "transaction rejected");
                return Err(e);
            }
        };

        // Checked before inserting so an account never exists without a transaction.
        let Some(transaction) = events
            .last()
            .map(|AccountEvent::TransactionRecorded(e)| e.transaction.clone())
        else {
            return Err(DomainError::invariant("record command produced no events"));
        };

        let account = accounts
            .entry(account_id.clone())
            .or_insert_with(|| Account::empty(account_id.clone()));
        for event in &events {
            account.apply(event);
        }

        tracing::debug!(
            account_id = %account_id,
            transaction_id = %transaction.id,
            %kind,
            %amount,
            balance = %account.balance(),
            "transaction recorded"
        );

        Ok(transaction)
    }

    /// Current balance of an account that has at least one transaction.
    pub fn get_balance(&self, account_id: &AccountId) -> DomainResult<Decimal> {
        self.read()
            .get(account_id)
            .map(Account::balance)
            .ok_or_else(|| DomainError::account_not_found(account_id))
    }

    /// Snapshot of the account's log in processing order (never empty).
    pub fn list_transactions(&self, account_id: &AccountId) -> DomainResult<Vec<Transaction>> {
        self.read()
            .get(account_id)
            .map(|account| account.transactions().to_vec())
            .ok_or_else(|| DomainError::account_not_found(account_id))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}
