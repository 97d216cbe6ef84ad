// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Human-readable summary
    #[schema(example = "Profile updated")]
    pub message: String,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "OTP has expired")]
    pub message: String,

    /// Always null for error responses
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,

    /// Error code for programmatic handling
    #[schema(example = "OTP_EXPIRED")]
    pub code: String,
}
