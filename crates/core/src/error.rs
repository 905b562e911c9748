//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing accounts, insufficient funds). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive amount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (a bug, not a client error).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. empty account id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced account has never had a transaction recorded.
    #[error("account {0} does not exist")]
    AccountNotFound(AccountId),

    /// A withdrawal would drive the balance below zero.
    #[error(
        "insufficient funds for withdrawal: account {account_id}, balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
        requested: Decimal,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn account_not_found(account_id: &AccountId) -> Self {
        Self::AccountNotFound(account_id.clone())
    }

    pub fn insufficient_funds(account_id: &AccountId, balance: Decimal, requested: Decimal) -> Self {
        Self::InsufficientFunds {
            account_id: account_id.clone(),
            balance,
            requested,
        }
    }
}
