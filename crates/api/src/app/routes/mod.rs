use axum::Router;

pub mod balance;
pub mod system;
pub mod transactions;

/// Router for all ledger endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/transactions", transactions::router())
        .nest("/balance", balance::router())
}

/// Parse the `{account_id}` path segment, mapping failures to a JSON 400.
pub(crate) fn parse_account_id(
    raw: String,
) -> Result<tinyledger_core::AccountId, axum::response::Response> {
    tinyledger_core::AccountId::new(raw).map_err(crate::app::errors::domain_error_to_response)
}
