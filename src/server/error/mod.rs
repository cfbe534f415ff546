//! Error types for the Gavel server application.
//!
//! This module provides a comprehensive error handling system with specialized error types
//! for different domains (authentication, configuration, fines, payments, users). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod fine;
pub mod payment;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, fine::FineError, payment::PaymentError,
        user::UserError,
    },
};

/// Main error type for the Gavel server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (bearer token verification, fine ownership)
/// - Fine errors (validation, state-machine guards, missing fines)
/// - Payment errors (validation, user resolution, missing records)
/// - User errors (registration validation)
/// - External library errors (database, outbound HTTP)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bearer token verification, fine ownership).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Fine lifecycle error (validation, state-machine guards, lookup failures).
    #[error(transparent)]
    FineError(#[from] FineError),
    /// Payment recording error (validation, user resolution, lookup failures).
    #[error(transparent)]
    PaymentError(#[from] PaymentError),
    /// User registration error (validation, duplicate identity).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Outbound HTTP error (identity provider JWKS fetch).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while the domain
/// error types carry their own response mappings.
///
/// # Returns
/// - 400 Bad Request - For validation failures and state-machine violations
/// - 401 Unauthorized - For bearer token and ownership failures
/// - 404 Not Found - For missing fines, payments, or users
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FineError(err) => err.into_response(),
            Self::PaymentError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client. Debug builds additionally echo the message in the `details` field of the
/// response body.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let details = cfg!(debug_assertions).then(|| self.0.to_string());

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                details,
            }),
        )
            .into_response()
    }
}
