//! Fund transfer RPC handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::ValidatedTransfer;
use crate::transfer::TransferResponse;

/// Process a fund transfer
///
/// POST /api/v1/fund_transfer
///
/// Business rejections (unknown account, insufficient funds) are returned as
/// `200` with `status = "FAILED"`. Only a malformed request gets a `400`.
#[utoipa::path(
    post,
    path = "/api/v1/fund_transfer",
    request_body(content = crate::transfer::TransferRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Transfer outcome (SUCCESS or FAILED)", body = TransferResponse, content_type = "application/json"),
        (status = 400, description = "Malformed request, unknown transfer_type or non-positive amount")
    ),
    tag = "Transfer"
)]
pub async fn process_fund_transfer(
    State(state): State<Arc<AppState>>,
    ValidatedTransfer(req): ValidatedTransfer,
) -> Json<TransferResponse> {
    // Critical section is short and does no I/O; run it inline on the task.
    Json(state.processor.process(&req))
}
