use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("A user is already registered for identity {0:?}")]
    AlreadyRegistered(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
