use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{
            PaymentDto, PaymentListQuery, PaymentWithUserDto, RecordPaymentDto, UserPaymentsQuery,
        },
    },
    server::{error::Error, model::app::AppState, service::payment::PaymentService},
};

pub static PAYMENT_TAG: &str = "payment";

/// Record a payment gateway outcome against a fine
#[utoipa::path(
    post,
    path = "/api/payments/add",
    tag = PAYMENT_TAG,
    request_body = RecordPaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "Fine or payer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_payment(
    State(state): State<AppState>,
    Json(dto): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db);

    let payment = payment_service.record(dto).await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// List payments with each payer's identity, optionally date-filtered
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(PaymentListQuery),
    responses(
        (status = 200, description = "Payments newest-first", body = Vec<PaymentWithUserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db);

    let payments = payment_service.list(query).await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Get a user's payment history by email or license number
#[utoipa::path(
    get,
    path = "/api/payments/user",
    tag = PAYMENT_TAG,
    params(UserPaymentsQuery),
    responses(
        (status = 200, description = "The user's payments, empty when no user matches", body = Vec<PaymentDto>),
        (status = 400, description = "Neither email nor license number given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_payments(
    State(state): State<AppState>,
    Query(query): Query<UserPaymentsQuery>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db);

    let payments = payment_service.list_for_user(query).await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Get the payment recorded for a gateway payment intent
#[utoipa::path(
    get,
    path = "/api/payments/{intent_id}",
    tag = PAYMENT_TAG,
    params(
        ("intent_id" = String, Path, description = "Gateway payment intent id")
    ),
    responses(
        (status = 200, description = "Payment for the intent", body = PaymentDto),
        (status = 404, description = "No payment for the intent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment_by_intent(
    State(state): State<AppState>,
    Path(intent_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let payment_service = PaymentService::new(&state.db);

    let payment = payment_service.get_by_intent_id(&intent_id).await?;

    Ok((StatusCode::OK, Json(payment)))
}
