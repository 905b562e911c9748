use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tinyledger_ledger::TransactionType;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /transactions/{account_id}`.
///
/// `amount` is accepted as-is; positivity is a ledger rule, not a parse rule.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub message: String,
}

impl TransactionResponse {
    pub fn recorded() -> Self {
        Self {
            message: "Transaction successfully recorded.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
}
