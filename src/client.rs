//! Transfer Client
//!
//! Dials the gateway, sends one [`TransferRequest`] under a bounded deadline
//! and decodes the [`TransferResponse`].

use std::time::Duration;

use thiserror::Error;

use crate::gateway::types::ApiResponse;
use crate::transfer::{TransferRequest, TransferResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request refused before reaching the processor (HTTP 4xx/5xx)
    #[error("Request rejected ({status}): {msg}")]
    Rejected { status: u16, code: i32, msg: String },
}

pub struct TransferClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl TransferClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one transfer. A `FAILED` outcome is `Ok`; only transport problems
    /// and boundary rejections are `Err`.
    pub async fn process_fund_transfer(
        &self,
        req: &TransferRequest,
    ) -> Result<TransferResponse, ClientError> {
        let url = format!("{}/api/v1/fund_transfer", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            let status = status.as_u16();
            return Err(match resp.json::<ApiResponse<()>>().await {
                Ok(body) => ClientError::Rejected {
                    status,
                    code: body.code,
                    msg: body.msg,
                },
                Err(_) => ClientError::Rejected {
                    status,
                    code: -1,
                    msg: "unreadable error body".to_string(),
                },
            });
        }

        resp.json::<TransferResponse>()
            .await
            .map_err(|e| self.classify(e))
    }

    fn classify(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::DeadlineExceeded(self.timeout)
        } else {
            ClientError::Transport(e)
        }
    }
}
