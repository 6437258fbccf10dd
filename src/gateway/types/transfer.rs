//! Transfer request extraction
//!
//! `ValidatedTransfer` rejects malformed bodies, unknown `transfer_type`
//! values and non-positive amounts at the framework level, so the handler only
//! ever sees a request the processor can act on.

use axum::{
    Json,
    extract::{FromRequest, Request},
};

use super::response::ApiError;
use crate::transfer::TransferRequest;

#[derive(Debug)]
pub struct ValidatedTransfer(pub TransferRequest);

impl<S> FromRequest<S> for ValidatedTransfer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(transfer): Json<TransferRequest> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        transfer.validate().map_err(ApiError::bad_request)?;

        Ok(ValidatedTransfer(transfer))
    }
}
