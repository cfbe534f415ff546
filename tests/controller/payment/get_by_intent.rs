//! Tests for the get_payment_by_intent endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::FineStatus;
use gavel::server::controller::payment::get_payment_by_intent;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

/// Expect 200 with the payment recorded for the intent
#[tokio::test]
async fn finds_payment_by_intent_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Paid)
        .await?;
    let payment_model = test
        .payment()
        .insert_mock_payment(fine_model.id, user_model.id)
        .await?;

    let result = get_payment_by_intent(
        State(app_state(&test)),
        Path(payment_model.stripe_payment_intent_id.clone()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["id"], payment_model.id);
    assert_eq!(
        body["stripePaymentIntentId"],
        payment_model.stripe_payment_intent_id
    );

    Ok(())
}

/// Expect 404 for an unknown intent id
#[tokio::test]
async fn not_found_for_unknown_intent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = get_payment_by_intent(State(app_state(&test)), Path("pi_unknown".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
