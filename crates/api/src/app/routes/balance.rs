use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use tinyledger_ledger::LedgerStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:account_id", get(get_balance))
}

pub async fn get_balance(
    Extension(store): Extension<Arc<LedgerStore>>,
    Path(account_id): Path<String>,
) -> axum::response::Response {
    let account_id = match super::parse_account_id(account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match store.get_balance(&account_id) {
        Ok(balance) => (StatusCode::OK, Json(dto::BalanceResponse { balance })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
