use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tinyledger_core::{
    AccountId, Aggregate, AggregateRoot, Amount, DomainError, DomainResult, TransactionId,
};

use crate::transaction::{Transaction, TransactionType};

/// Aggregate root: Account (balance + append-only transaction log).
///
/// An account "exists" once it has at least one recorded transaction. The
/// empty instance is only used to decide the first command for a new id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Empty, not-yet-existing account (balance 0, no transactions).
    pub fn empty(id: AccountId) -> Self {
        Self {
            id,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn exists(&self) -> bool {
        !self.transactions.is_empty()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Log in processing order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.transactions.len() as u64
    }
}

/// Command: RecordTransaction.
///
/// `amount` is the raw requested value; it is validated by `handle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTransaction {
    pub kind: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    RecordTransaction(RecordTransaction),
}

/// Event: TransactionRecorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecorded {
    pub transaction: Transaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    TransactionRecorded(TransactionRecorded),
}

impl Aggregate for Account {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AccountEvent::TransactionRecorded(e) => {
                self.balance += e.transaction.signed_amount();
                self.transactions.push(e.transaction.clone());
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::RecordTransaction(cmd) => Ok(vec![AccountEvent::TransactionRecorded(
                self.handle_record(cmd)?,
            )]),
        }
    }
}

impl Account {
    /// Validate a transaction against current state without mutating it.
    ///
    /// Order: amount, then existence (withdrawals only), then funds. A deposit
    /// whose resulting balance is not representable is rejected here, so
    /// `apply` never overflows.
    fn handle_record(&self, cmd: &RecordTransaction) -> DomainResult<TransactionRecorded> {
        let amount = Amount::new(cmd.amount)?;

        if cmd.kind == TransactionType::Deposit
            && self.balance.checked_add(amount.value()).is_none()
        {
            return Err(DomainError::validation("amount would overflow the balance"));
        }

        if cmd.kind == TransactionType::Withdrawal {
            if !self.exists() {
                return Err(DomainError::account_not_found(&self.id));
            }
            if self.balance < amount.value() {
                return Err(DomainError::insufficient_funds(
                    &self.id,
                    self.balance,
                    amount.value(),
                ));
            }
        }

        Ok(TransactionRecorded {
            transaction: Transaction {
                id: TransactionId::new(self.id.clone(), self.version() + 1),
                account_id: self.id.clone(),
                kind: cmd.kind,
                amount,
                description: cmd.description.clone(),
                timestamp: cmd.occurred_at,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account_id() -> AccountId {
        AccountId::new("acc1").unwrap()
    }

    fn record(kind: TransactionType, amount: Decimal) -> AccountCommand {
        AccountCommand::RecordTransaction(RecordTransaction {
            kind,
            amount,
            description: None,
            occurred_at: Utc::now(),
        })
    }

    fn execute(account: &mut Account, cmd: AccountCommand) -> Result<(), DomainError> {
        let events = account.handle(&cmd)?;
        for e in &events {
            account.apply(e);
        }
        Ok(())
    }

    #[test]
    fn first_deposit_creates_account_with_sequence_one() {
        let account = Account::empty(account_id());
        assert!(!account.exists());

        let events = account
            .handle(&record(TransactionType::Deposit, dec!(100)))
            .unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            AccountEvent::TransactionRecorded(e) => {
                assert_eq!(e.transaction.id.to_string(), "acc1_1");
                assert_eq!(e.transaction.account_id, account_id());
                assert_eq!(e.transaction.amount.value(), dec!(100));
            }
        }
    }

    #[test]
    fn handle_does_not_mutate() {
        let account = Account::empty(account_id());
        let before = account.clone();
        let _ = account.handle(&record(TransactionType::Deposit, dec!(5)));
        assert_eq!(account, before);
    }

    #[test]
    fn apply_updates_balance_and_version() {
        let mut account = Account::empty(account_id());
        execute(&mut account, record(TransactionType::Deposit, dec!(200))).unwrap();
        execute(&mut account, record(TransactionType::Withdrawal, dec!(75))).unwrap();

        assert_eq!(account.balance(), dec!(125));
        assert_eq!(account.version(), 2);
        assert_eq!(account.transactions()[1].id.sequence(), 2);
    }

    #[test]
    fn withdrawal_on_empty_account_is_not_found() {
        let account = Account::empty(account_id());
        let err = account
            .handle(&record(TransactionType::Withdrawal, dec!(50)))
            .unwrap_err();
        assert_eq!(err, DomainError::AccountNotFound(account_id()));
    }

    #[test]
    fn amount_is_checked_before_existence() {
        let account = Account::empty(account_id());
        let err = account
            .handle(&record(TransactionType::Withdrawal, dec!(0)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn overdraw_is_rejected_with_balance_details() {
        let mut account = Account::empty(account_id());
        execute(&mut account, record(TransactionType::Deposit, dec!(50))).unwrap();

        let err = execute(&mut account, record(TransactionType::Withdrawal, dec!(100))).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientFunds {
                account_id: account_id(),
                balance: dec!(50),
                requested: dec!(100),
            }
        );
        assert_eq!(account.balance(), dec!(50));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn deposit_past_decimal_max_is_rejected_without_mutation() {
        let mut account = Account::empty(account_id());
        execute(&mut account, record(TransactionType::Deposit, Decimal::MAX - Decimal::ONE)).unwrap();
        execute(&mut account, record(TransactionType::Deposit, Decimal::ONE)).unwrap();
        assert_eq!(account.balance(), Decimal::MAX);

        let before = account.clone();
        let err = execute(&mut account, record(TransactionType::Deposit, Decimal::ONE)).unwrap_err();
        assert_eq!(err, DomainError::validation("amount would overflow the balance"));
        assert_eq!(account, before);

        // Withdrawing from a full account still works.
        execute(&mut account, record(TransactionType::Withdrawal, Decimal::MAX)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn withdrawing_exact_balance_leaves_zero() {
        let mut account = Account::empty(account_id());
        execute(&mut account, record(TransactionType::Deposit, dec!(30.25))).unwrap();
        execute(&mut account, record(TransactionType::Withdrawal, dec!(30.25))).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.exists());
    }
}
