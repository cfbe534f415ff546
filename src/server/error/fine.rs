use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FineError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Fine amount must be greater than zero")]
    InvalidAmount,
    #[error("Invalid fine status: {0:?}")]
    InvalidStatus(String),
    #[error("Invalid dispute resolution action: {0:?}")]
    InvalidAction(String),
    #[error("Fine ID {0:?} not found")]
    NotFound(i32),
    #[error("Fine ID {fine_id:?} cannot be disputed while in {status:?} status")]
    NotDisputable { fine_id: i32, status: String },
    #[error("Fine ID {fine_id:?} is not in disputed status")]
    NotDisputed { fine_id: i32 },
    #[error("Fine ID {fine_id:?} cannot be paid while in {status:?} status")]
    NotPayable { fine_id: i32, status: String },
    #[error("No user found for license number {license_number:?} and no email provided")]
    OwnerNotFound { license_number: String },
}

impl IntoResponse for FineError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound(_) | Self::OwnerNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
