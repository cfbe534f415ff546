use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or is not a bearer token")]
    MissingBearerToken,
    #[error("Bearer token header does not carry a key ID")]
    MissingKeyId,
    #[error("No identity provider key matches key ID {0:?}")]
    UnknownKeyId(String),
    #[error(transparent)]
    TokenRejected(#[from] jsonwebtoken::errors::Error),
    #[error("Fine ID {fine_id:?} does not belong to the authenticated user")]
    FineNotOwned { fine_id: i32 },
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingBearerToken => {
                Self::unauthorized("Unauthorized - Missing or invalid token")
            }
            Self::MissingKeyId | Self::UnknownKeyId(_) | Self::TokenRejected(_) => {
                Self::unauthorized("Unauthorized - Invalid token")
            }
            Self::FineNotOwned { .. } => {
                Self::unauthorized("Fine does not belong to the authenticated user")
            }
        }
    }
}
