//! Gateway types module
//!
//! ## Input Types
//! - [`ValidatedTransfer`]: Axum extractor for boundary validation
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: Handler/extractor rejection
//!
//! ## Submodules
//! - [`response`]: Response types and error codes
//! - [`transfer`]: Transfer request extraction

pub mod response;
pub mod transfer;

// Re-export commonly used types at module root
pub use response::{ApiError, ApiResponse, ApiResult, BalanceData, error_codes, ok};
pub use transfer::ValidatedTransfer;
