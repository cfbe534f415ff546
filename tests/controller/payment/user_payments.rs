//! Tests for the get_user_payments endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::payment::UserPaymentsQuery;
use gavel::server::controller::payment::get_user_payments;
use gavel_test_utils::constant::TEST_LICENSE_NUMBER;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

/// Expect 200 with only the matched user's payments
#[tokio::test]
async fn returns_payments_for_license_number() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let other = test
        .user()
        .insert_mock_user("firebase-uid-0002", "other@example.com", None)
        .await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Paid)
        .await?;
    let other_fine = test
        .fine()
        .insert_mock_fine(other.id, FineStatus::Paid)
        .await?;
    let payment_model = test
        .payment()
        .insert_mock_payment(fine_model.id, user_model.id)
        .await?;
    test.payment()
        .insert_mock_payment(other_fine.id, other.id)
        .await?;

    let result = get_user_payments(
        State(app_state(&test)),
        Query(UserPaymentsQuery {
            email: None,
            license_number: Some(TEST_LICENSE_NUMBER.to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let payments = body.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["id"], payment_model.id);

    Ok(())
}

/// Expect 200 with an empty array when no user matches
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = get_user_payments(
        State(app_state(&test)),
        Query(UserPaymentsQuery {
            email: Some("nobody@example.com".to_string()),
            license_number: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 400 when neither email nor license number is given
#[tokio::test]
async fn bad_request_without_criteria() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = get_user_payments(
        State(app_state(&test)),
        Query(UserPaymentsQuery {
            email: None,
            license_number: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
