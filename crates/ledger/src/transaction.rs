use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tinyledger_core::{AccountId, Amount, Entity, TransactionId};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionType::Deposit => f.write_str("deposit"),
            TransactionType::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// Recorded transaction (immutable once appended to an account's log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Amount,
    pub description: Option<String>,
    /// Assigned by the store when the transaction is processed.
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Effect on the account balance: positive for deposits, negative for withdrawals.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Deposit => self.amount.value(),
            TransactionType::Withdrawal => -self.amount.value(),
        }
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
