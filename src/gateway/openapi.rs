//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:50051/docs`
//! - OpenAPI JSON: `http://localhost:50051/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::BalanceData;
use crate::transfer::{TransferRequest, TransferResponse, TransferStatus, TransferType};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Driftmark Fund Transfer API",
        version = "1.0.0",
        description = "Fund transfer RPC over an in-memory account ledger.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:50051", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::process_fund_transfer,
        crate::gateway::handlers::get_account_balance,
    ),
    components(
        schemas(
            HealthResponse,
            BalanceData,
            TransferRequest,
            TransferResponse,
            TransferStatus,
            TransferType,
        )
    ),
    tags(
        (name = "System", description = "Service health"),
        (name = "Transfer", description = "Fund transfer RPC"),
        (name = "Account", description = "Balance queries"),
    )
)]
pub struct ApiDoc;
