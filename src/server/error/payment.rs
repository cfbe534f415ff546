use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Payment amount must be greater than zero")]
    InvalidAmount,
    #[error("Invalid payment status: {0:?}")]
    InvalidStatus(String),
    #[error("Missing search criteria, provide an email or license number")]
    MissingSearchCriteria,
    #[error("No payment found for payment intent ID {0:?}")]
    IntentNotFound(String),
    #[error("Fine ID {0:?} not found")]
    FineNotFound(i32),
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("No user matches this payment and no email was provided to create one")]
    PayerNotResolved,
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::IntentNotFound(_)
            | Self::FineNotFound(_)
            | Self::UserNotFound(_)
            | Self::PayerNotResolved => StatusCode::NOT_FOUND,
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
