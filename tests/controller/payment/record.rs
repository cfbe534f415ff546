//! Tests for the record_payment endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::payment::RecordPaymentDto;
use gavel::server::controller::payment::record_payment;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

fn dto(fine_id: i32) -> RecordPaymentDto {
    RecordPaymentDto {
        fine_id: Some(fine_id),
        user_id: None,
        email: None,
        license_number: None,
        amount: Some(5000.0),
        stripe_payment_intent_id: Some("pi_test_0001".to_string()),
        status: None,
        paid_at: None,
    }
}

/// Expect 201 with the payment linked to the fine's owner
#[tokio::test]
async fn records_payment_for_fine_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let result = record_payment(State(app_state(&test)), Json(dto(fine_model.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["fineId"], fine_model.id);
    assert_eq!(body["userId"], user_model.id);
    assert_eq!(body["status"], "succeeded");
    assert_eq!(body["stripePaymentIntentId"], "pi_test_0001");

    Ok(())
}

/// Expect 201 with a placeholder payer created from the given email
#[tokio::test]
async fn creates_placeholder_payer_from_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine_for_license(user_model.id, "ZZZ9999", FineStatus::Pending)
        .await?;

    let mut payment_dto = dto(fine_model.id);
    payment_dto.license_number = Some("ZZZ9999".to_string());
    payment_dto.email = Some("Walkin.Payer@Example.com".to_string());

    let result = record_payment(State(app_state(&test)), Json(payment_dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    let payer_id = body["userId"].as_i64().unwrap() as i32;
    assert_ne!(payer_id, user_model.id);

    Ok(())
}

/// Expect 404 when the fine does not exist
#[tokio::test]
async fn not_found_for_nonexistent_fine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = record_payment(State(app_state(&test)), Json(dto(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a non-positive amount
#[tokio::test]
async fn bad_request_for_invalid_amount() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let mut payment_dto = dto(fine_model.id);
    payment_dto.amount = Some(0.0);

    let result = record_payment(State(app_state(&test)), Json(payment_dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the gateway intent id is missing
#[tokio::test]
async fn bad_request_for_missing_intent_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let mut payment_dto = dto(fine_model.id);
    payment_dto.stripe_payment_intent_id = None;

    let result = record_payment(State(app_state(&test)), Json(payment_dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
