//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a ledger account.
///
/// Client-chosen, opaque, non-empty. Accounts are keyed by this value and
/// created lazily on their first deposit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("AccountId: must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

/// Identifier of a transaction within one account's log.
///
/// Rendered as `{account_id}_{sequence}`. Unique within an account because
/// the sequence is the 1-based position in that account's log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TransactionId {
    account_id: AccountId,
    sequence: u64,
}

impl TransactionId {
    pub fn new(account_id: AccountId, sequence: u64) -> Self {
        Self {
            account_id,
            sequence,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// 1-based position in the owning account's log.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}_{}", self.account_id, self.sequence)
    }
}

impl FromStr for TransactionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Account ids may themselves contain '_', so split on the last one.
        let (account, seq) = s
            .rsplit_once('_')
            .ok_or_else(|| DomainError::invalid_id(format!("TransactionId: {s}")))?;
        let sequence = seq
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("TransactionId: {e}")))?;
        if sequence == 0 {
            return Err(DomainError::invalid_id("TransactionId: sequence starts at 1"));
        }
        Ok(Self::new(AccountId::new(account)?, sequence))
    }
}

impl TryFrom<String> for TransactionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionId> for String {
    fn from(value: TransactionId) -> Self {
        value.to_string()
    }
}
