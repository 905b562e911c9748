use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use tinyledger_ledger::LedgerStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:account_id", post(create_transaction).get(list_transactions))
}

pub async fn create_transaction(
    Extension(store): Extension<Arc<LedgerStore>>,
    Path(account_id): Path<String>,
    Json(body): Json<dto::TransactionRequest>,
) -> axum::response::Response {
    let account_id = match super::parse_account_id(account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match store.process_transaction(&account_id, body.kind, body.amount, body.description) {
        Ok(_) => (StatusCode::CREATED, Json(dto::TransactionResponse::recorded())).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_transactions(
    Extension(store): Extension<Arc<LedgerStore>>,
    Path(account_id): Path<String>,
) -> axum::response::Response {
    let account_id = match super::parse_account_id(account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match store.list_transactions(&account_id) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
