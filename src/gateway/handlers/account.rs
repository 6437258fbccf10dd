//! Account handlers (balance lookup)

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, BalanceData, ok};

/// Get account balance
///
/// GET /api/v1/accounts/{account}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account}",
    params(
        ("account" = String, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Balance details", body = BalanceData, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account_balance(
    State(state): State<Arc<AppState>>,
    Path(account): Path<String>,
) -> ApiResult<BalanceData> {
    match state.ledger().balance(&account) {
        Some(balance) => ok(BalanceData { account, balance }),
        None => ApiError::account_not_found(&account).into_err(),
    }
}
