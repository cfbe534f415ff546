//! Tests for the list_payments endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::payment::PaymentListQuery;
use gavel::server::controller::payment::list_payments;
use gavel_test_utils::constant::TEST_EMAIL;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

/// Expect 200 with each payment carrying its payer's identity
#[tokio::test]
async fn lists_payments_with_payer_identity() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Paid)
        .await?;
    test.payment()
        .insert_mock_payment(fine_model.id, user_model.id)
        .await?;

    let result = list_payments(
        State(app_state(&test)),
        Query(PaymentListQuery {
            from: None,
            to: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let payments = body.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["email"], TEST_EMAIL);

    Ok(())
}

/// Expect 200 with only the payments inside the requested day range
#[tokio::test]
async fn filters_by_day_range() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Paid)
        .await?;

    let inside = NaiveDate::from_ymd_opt(2026, 5, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let outside = NaiveDate::from_ymd_opt(2026, 5, 20)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let kept = test
        .payment()
        .insert_mock_payment_paid_at(fine_model.id, user_model.id, inside)
        .await?;
    test.payment()
        .insert_mock_payment_paid_at(fine_model.id, user_model.id, outside)
        .await?;

    let result = list_payments(
        State(app_state(&test)),
        Query(PaymentListQuery {
            from: NaiveDate::from_ymd_opt(2026, 5, 1),
            to: NaiveDate::from_ymd_opt(2026, 5, 15),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let payments = body.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["id"], kept.id);

    Ok(())
}
