//! Ledger module: per-account deposits, withdrawals and running balances.
//!
//! Pure bookkeeping plus an in-memory, thread-safe store. No IO, no HTTP.

pub mod account;
pub mod store;
pub mod transaction;

pub use account::{Account, AccountCommand, AccountEvent, RecordTransaction, TransactionRecorded};
pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionType};
