use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// Diagnostic detail, only populated in debug builds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A plain confirmation returned by operations with no payload
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// The confirmation message
    pub message: String,
}
